use rand::Rng;

pub static FIRST_NAMES: &[&str] = &[
    "Ana", "Beatriz", "Bruno", "Camila", "Carlos", "Daniel", "Eduardo", "Fernanda", "Gabriel",
    "Helena", "Isabela", "João", "Juliana", "Lucas", "Mariana", "Mateus", "Pedro", "Rafael",
    "Sofia", "Thiago",
];

pub static LAST_NAMES: &[&str] = &[
    "Almeida", "Alves", "Barbosa", "Carvalho", "Costa", "Ferreira", "Gomes", "Lima", "Martins",
    "Oliveira", "Pereira", "Ribeiro", "Rodrigues", "Santos", "Silva", "Souza",
];

/// "First Last" drawn from the built-in lists.
pub fn random_full_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    let first = FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())];
    let last = LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())];
    format!("{first} {last}")
}
