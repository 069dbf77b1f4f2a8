use rand::rngs::{OsRng, StdRng};
use rand::{CryptoRng, RngCore, SeedableRng};

use crate::engine::{RandomSource, ShuffleError};

/// Боевой источник: энтропия ОС.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemRng;

impl RandomSource for SystemRng {
    fn index_up_to(&mut self, upper: usize) -> Result<usize, ShuffleError> {
        uniform_index(&mut OsRng, upper)
    }
}

/// Детерминированный RNG для тестов и реплея.
/// Одинаковый seed - одинаковые перестановки.
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    inner: StdRng,
}

impl DeterministicRng {
    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self {
            inner: StdRng::from_seed(seed),
        }
    }

    pub fn from_u64(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for DeterministicRng {
    fn index_up_to(&mut self, upper: usize) -> Result<usize, ShuffleError> {
        uniform_index(&mut self.inner, upper)
    }
}

/// Равномерный индекс из `[0, upper]` выборкой с отбраковкой (без смещения
/// по модулю). Ошибка генератора пробрасывается, а не превращается в панику.
fn uniform_index<R>(rng: &mut R, upper: usize) -> Result<usize, ShuffleError>
where
    R: RngCore + CryptoRng,
{
    let range = (upper as u64).saturating_add(1);
    let zone = u64::MAX - (u64::MAX % range);

    loop {
        let mut buf = [0u8; 8];
        rng.try_fill_bytes(&mut buf)?;
        let x = u64::from_le_bytes(buf);
        if x < zone {
            return Ok((x % range) as usize);
        }
    }
}
