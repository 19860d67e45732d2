use ahash::HashMap;
use rogue_modifiers::{
    Session,
    data::{
        PokeballType,
        VoucherType,
    },
};

/// An in-memory session wallet and bag.
#[derive(Debug, Clone, Default)]
pub struct TestSession {
    pub money: u64,
    /// The unscaled money reward of the current wave.
    pub wave_money: u64,
    pub pokeballs: HashMap<PokeballType, u32>,
    pub vouchers: HashMap<VoucherType, u32>,
}

impl TestSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_wave_money(mut self, wave_money: u64) -> Self {
        self.wave_money = wave_money;
        self
    }
}

impl Session for TestSession {
    fn money(&self) -> u64 {
        self.money
    }

    fn add_money(&mut self, amount: u64) {
        self.money += amount;
    }

    fn wave_money_amount(&self, multiplier: f64) -> u64 {
        (self.wave_money as f64 * multiplier).floor() as u64
    }

    fn pokeball_count(&self, pokeball: PokeballType) -> u32 {
        self.pokeballs.get(&pokeball).copied().unwrap_or(0)
    }

    fn set_pokeball_count(&mut self, pokeball: PokeballType, count: u32) {
        self.pokeballs.insert(pokeball, count);
    }

    fn add_vouchers(&mut self, voucher: VoucherType, count: u32) {
        *self.vouchers.entry(voucher).or_default() += count;
    }
}
