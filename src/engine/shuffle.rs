use thiserror::Error;

use crate::engine::RandomSource;

#[derive(Debug, Error)]
pub enum ShuffleError {
    #[error("Источник случайности недоступен: {0}")]
    RandomSource(#[from] rand::Error),
}

/// Перемешивание Фишера-Йетса на месте.
///
/// Все индексы вытягиваются до первой перестановки: если источник упал,
/// срез остаётся ровно таким, каким был.
pub fn shuffle<T, R>(slice: &mut [T], rng: &mut R) -> Result<(), ShuffleError>
where
    R: RandomSource + ?Sized,
{
    if slice.len() < 2 {
        return Ok(());
    }

    let mut swaps = Vec::with_capacity(slice.len() - 1);
    for i in (1..slice.len()).rev() {
        swaps.push((i, rng.index_up_to(i)?));
    }

    for (i, j) in swaps {
        slice.swap(i, j);
    }
    Ok(())
}
