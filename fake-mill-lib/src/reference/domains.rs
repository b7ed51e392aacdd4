use rand::Rng;

pub static EMAIL_SHORT_NAMES: &[&str] = &[
    "mail", "email", "correio", "webmail", "net", "online", "conecta", "caixa", "post", "inbox",
    "brmail", "zap", "turbo", "nuvem",
];

pub static DOMAIN_EXTENSIONS: &[&str] = &["com", "com.br", "net", "net.br", "org", "org.br", "io"];

/// `shortname.extension` drawn from the built-in lists.
pub fn random_domain<R: Rng + ?Sized>(rng: &mut R) -> String {
    let name = EMAIL_SHORT_NAMES[rng.gen_range(0..EMAIL_SHORT_NAMES.len())];
    let ext = DOMAIN_EXTENSIONS[rng.gen_range(0..DOMAIN_EXTENSIONS.len())];
    format!("{name}.{ext}")
}
