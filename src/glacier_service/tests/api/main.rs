mod find_user;
mod health_check;
mod helpers;
