//! Micro benchmarks for document check-digit validation and generation.
//! Pure CPU - no network, no IO.
//!
//! ```bash
//! cargo bench --bench bench_checksum
//! ```

use criterion::{criterion_group, criterion_main, Criterion};
use fake_mill_lib::documents::{cnpj, cpf, rg};
use rand::rngs::StdRng;
use rand::SeedableRng;

const CPF_FORMATTED: &str = "529.982.247-25";
const CNPJ_FORMATTED: &str = "11.222.333/0001-81";
const RG_FORMATTED: &str = "60.000.000-X";

fn bench_validate(c: &mut Criterion) {
    assert!(cpf::validate(CPF_FORMATTED), "CPF fixture must be valid");
    assert!(cnpj::validate(CNPJ_FORMATTED), "CNPJ fixture must be valid");
    assert!(rg::validate(RG_FORMATTED), "RG fixture must be valid");

    c.bench_function("cpf_validate_formatted", |b| {
        b.iter(|| cpf::validate(std::hint::black_box(CPF_FORMATTED)));
    });
    c.bench_function("cnpj_validate_formatted", |b| {
        b.iter(|| cnpj::validate(std::hint::black_box(CNPJ_FORMATTED)));
    });
    c.bench_function("rg_validate_formatted", |b| {
        b.iter(|| rg::validate(std::hint::black_box(RG_FORMATTED)));
    });
}

fn bench_generate(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);

    c.bench_function("cpf_generate_valid_formatted", |b| {
        b.iter(|| cpf::generate(&mut rng, true, true));
    });
    c.bench_function("cnpj_generate_valid_formatted", |b| {
        b.iter(|| cnpj::generate(&mut rng, true, true));
    });
}

criterion_group!(checksum_benches, bench_validate, bench_generate);
criterion_main!(checksum_benches);
