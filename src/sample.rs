use super::*;

pub(crate) const SAMPLE_SIZE: usize = 10;

/// Picks up to [`SAMPLE_SIZE`] distinct ids at random, without replacement.
/// Repeated ids count once.
pub(crate) fn sample(ids: Vec<u64>) -> Vec<u64> {
  sample_with(ids, &mut rand::thread_rng())
}

pub(crate) fn sample_with<R: Rng + ?Sized>(
  mut candidates: Vec<u64>,
  rng: &mut R,
) -> Vec<u64> {
  let mut seen = HashSet::new();
  candidates.retain(|id| seen.insert(*id));

  let mut picked = Vec::with_capacity(SAMPLE_SIZE.min(candidates.len()));

  while picked.len() < SAMPLE_SIZE && !candidates.is_empty() {
    let index = rng.gen_range(0..candidates.len());
    picked.push(candidates.remove(index));
  }

  picked
}
