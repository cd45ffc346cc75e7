use quickcheck::{Arbitrary, Gen};

const LOCAL_CHARS: &[char] = &[
    'a', 'b', 'k', 'q', 'z', '0', '7', '9', '.', '_', '%', '+', '-',
];
const DOMAIN_CHARS: &[char] = &['a', 'e', 'm', 'x', 'z', '0', '4', '9', '.', '-'];
const TLD_CHARS: &[char] = &['a', 'c', 'g', 'm', 'o', 'r', 't', 'z'];

fn sample(g: &mut Gen, alphabet: &[char], min: usize, max: usize) -> String {
    let len = min + usize::arbitrary(g) % (max - min + 1);
    (0..len).filter_map(|_| g.choose(alphabet).copied()).collect()
}

/// An address matching the accepted lowercase email pattern.
#[derive(Debug, Clone)]
pub struct ValidEmailFixture(pub String);

impl Arbitrary for ValidEmailFixture {
    fn arbitrary(g: &mut Gen) -> Self {
        let local = sample(g, LOCAL_CHARS, 1, 12);
        let domain = sample(g, DOMAIN_CHARS, 1, 12);
        let tld = sample(g, TLD_CHARS, 2, 4);
        Self(format!("{local}@{domain}.{tld}"))
    }
}

/// Any non-empty string, including whitespace and non-ASCII characters.
#[derive(Debug, Clone)]
pub struct NonEmptyName(pub String);

impl Arbitrary for NonEmptyName {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut name = String::arbitrary(g);
        if name.is_empty() {
            name.push(char::arbitrary(g));
        }
        Self(name)
    }
}
