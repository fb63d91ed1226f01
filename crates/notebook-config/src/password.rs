use std::env;

const MIN_COST: u32 = 4;
const MAX_COST: u32 = 31;

#[derive(Clone, Debug)]
pub struct PasswordConfig {
    pub bcrypt_cost: u32,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self { bcrypt_cost: 10 }
    }
}

impl PasswordConfig {
    pub fn from_env() -> Self {
        let bcrypt_cost = env::var("BCRYPT_COST")
            .ok()
            .and_then(|s| s.parse::<u32>().ok())
            .unwrap_or(10);

        Self::with_cost(bcrypt_cost)
    }

    /// Clamps `cost` into the range bcrypt accepts.
    pub fn with_cost(cost: u32) -> Self {
        Self {
            bcrypt_cost: cost.clamp(MIN_COST, MAX_COST),
        }
    }
}
