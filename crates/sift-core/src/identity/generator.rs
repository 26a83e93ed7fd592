use super::{IdentityConfig, SerialGenerator};
use crate::{
    stmt::{Type, Value},
    Error, Result,
};

use chrono::Utc;
use once_cell::sync::OnceCell;
use rand::Rng;
use rust_decimal::Decimal;
use uuid::Uuid;

static GLOBAL: OnceCell<IdentityGenerator> = OnceCell::new();

/// Synthesizes primary-key values by declared type.
#[derive(Debug)]
pub struct IdentityGenerator {
    config: IdentityConfig,
    serial: SerialGenerator,
}

impl IdentityGenerator {
    pub fn new(config: IdentityConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            serial: SerialGenerator::new(config.worker_id, config.epoch_ms),
            config,
        })
    }

    /// The process-wide generator. Uses [`IdentityConfig::default`] unless
    /// [`install`] ran first.
    pub fn global() -> &'static IdentityGenerator {
        GLOBAL.get_or_init(|| Self {
            serial: SerialGenerator::new(0, IdentityConfig::DEFAULT_EPOCH_MS),
            config: IdentityConfig::default(),
        })
    }

    pub fn config(&self) -> &IdentityConfig {
        &self.config
    }

    pub fn next_serial(&self) -> i64 {
        self.serial.next()
    }

    /// Returns `true` if [`IdentityGenerator::value_for`] can synthesize keys
    /// of type `ty`.
    pub fn supports(ty: &Type) -> bool {
        ty.is_integer()
            || matches!(
                ty,
                Type::Decimal | Type::String | Type::Uuid | Type::DateTime
            )
    }

    /// A fresh value for a key of type `ty`, or `None` when keys of that
    /// type cannot be synthesized.
    pub fn value_for(&self, ty: &Type) -> Option<Value> {
        Some(match ty {
            ty if ty.is_small_integer() => {
                let (_, type_max) = ty.integer_bounds()?;
                let max = type_max.min(i128::from(self.config.random_max)).max(1);
                let n = rand::thread_rng().gen_range(1..=max);
                ty.cast(Value::I64(i64::try_from(n).ok()?)).ok()?
            }
            Type::I64 => Value::I64(self.next_serial()),
            Type::U64 => Value::U64(self.next_serial().unsigned_abs()),
            Type::Decimal => Value::Decimal(Decimal::from(self.next_serial())),
            Type::String => Value::String(self.next_serial().to_string()),
            Type::Uuid => Value::Uuid(Uuid::new_v4()),
            Type::DateTime => Value::DateTime(Utc::now()),
            _ => return None,
        })
    }
}

/// Installs the process-wide generator. Only the first call succeeds, and
/// only before the generator is first used.
pub fn install(config: IdentityConfig) -> Result<()> {
    let generator = IdentityGenerator::new(config)?;
    GLOBAL.set(generator).map_err(|_| {
        Error::configuration(
            "IdentityGenerator",
            "the identity generator is already installed or in use",
        )
    })
}
