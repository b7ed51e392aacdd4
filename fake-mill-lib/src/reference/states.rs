use rand::Rng;

/// A Brazilian federative unit and its telephone area codes (DDD).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct State {
    pub code: &'static str,
    pub name: &'static str,
    pub area_codes: &'static [u8],
}

pub static STATES: &[State] = &[
    State { code: "AC", name: "Acre", area_codes: &[68] },
    State { code: "AL", name: "Alagoas", area_codes: &[82] },
    State { code: "AP", name: "Amapá", area_codes: &[96] },
    State { code: "AM", name: "Amazonas", area_codes: &[92, 97] },
    State { code: "BA", name: "Bahia", area_codes: &[71, 73, 74, 75, 77] },
    State { code: "CE", name: "Ceará", area_codes: &[85, 88] },
    State { code: "DF", name: "Distrito Federal", area_codes: &[61] },
    State { code: "ES", name: "Espírito Santo", area_codes: &[27, 28] },
    State { code: "GO", name: "Goiás", area_codes: &[62, 64] },
    State { code: "MA", name: "Maranhão", area_codes: &[98, 99] },
    State { code: "MT", name: "Mato Grosso", area_codes: &[65, 66] },
    State { code: "MS", name: "Mato Grosso do Sul", area_codes: &[67] },
    State { code: "MG", name: "Minas Gerais", area_codes: &[31, 32, 33, 34, 35, 37, 38] },
    State { code: "PA", name: "Pará", area_codes: &[91, 93, 94] },
    State { code: "PB", name: "Paraíba", area_codes: &[83] },
    State { code: "PR", name: "Paraná", area_codes: &[41, 42, 43, 44, 45, 46] },
    State { code: "PE", name: "Pernambuco", area_codes: &[81, 87] },
    State { code: "PI", name: "Piauí", area_codes: &[86, 89] },
    State { code: "RJ", name: "Rio de Janeiro", area_codes: &[21, 22, 24] },
    State { code: "RN", name: "Rio Grande do Norte", area_codes: &[84] },
    State { code: "RS", name: "Rio Grande do Sul", area_codes: &[51, 53, 54, 55] },
    State { code: "RO", name: "Rondônia", area_codes: &[69] },
    State { code: "RR", name: "Roraima", area_codes: &[95] },
    State { code: "SC", name: "Santa Catarina", area_codes: &[47, 48, 49] },
    State { code: "SP", name: "São Paulo", area_codes: &[11, 12, 13, 14, 15, 16, 17, 18, 19] },
    State { code: "SE", name: "Sergipe", area_codes: &[79] },
    State { code: "TO", name: "Tocantins", area_codes: &[63] },
];

/// Look a state up by its two-letter code, ignoring case and surrounding whitespace.
pub fn find_state(code: &str) -> Option<&'static State> {
    let code = code.trim();
    if code.len() != 2 {
        return None;
    }
    STATES.iter().find(|state| state.code.eq_ignore_ascii_case(code))
}

pub fn random_state<R: Rng + ?Sized>(rng: &mut R) -> &'static State {
    &STATES[rng.gen_range(0..STATES.len())]
}

impl State {
    pub fn random_area_code<R: Rng + ?Sized>(&self, rng: &mut R) -> u8 {
        self.area_codes[rng.gen_range(0..self.area_codes.len())]
    }
}
