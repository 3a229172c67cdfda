use rand::distributions::{uniform::Uniform, Distribution};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::die::{DieError, Face};

/// Where new die faces come from. Drawing never fails.
pub trait FaceSource {
    fn draw(&mut self) -> Face;
}

impl<S: FaceSource + ?Sized> FaceSource for Box<S> {
    fn draw(&mut self) -> Face {
        (**self).draw()
    }
}

fn uniform_face<R: Rng>(rng: &mut R) -> Face {
    let index = Uniform::new(0, Face::ALL.len());
    Face::ALL[index.sample(rng)]
}

pub struct ThreadRngSource;

impl FaceSource for ThreadRngSource {
    fn draw(&mut self) -> Face {
        uniform_face(&mut rand::thread_rng())
    }
}

/// Reproducible rolls, e.g. for `--seed`.
pub struct SeededSource {
    rng: StdRng,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl FaceSource for SeededSource {
    fn draw(&mut self) -> Face {
        uniform_face(&mut self.rng)
    }
}

/// Hands out a fixed sequence of faces in order, starting over when it runs out.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    faces: Vec<Face>,
    next: usize,
}

impl ScriptedSource {
    pub fn new(faces: Vec<Face>) -> Result<Self, DieError> {
        if faces.is_empty() {
            return Err(DieError::EmptyScript);
        }
        Ok(Self { faces, next: 0 })
    }

    pub fn from_values(values: &[u8]) -> Result<Self, DieError> {
        let faces = values
            .iter()
            .map(|&v| Face::new(v))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(faces)
    }
}

impl FaceSource for ScriptedSource {
    fn draw(&mut self) -> Face {
        let face = self.faces[self.next];
        self.next = (self.next + 1) % self.faces.len();
        face
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_returns_sequence_then_cycles() {
        let mut source = ScriptedSource::from_values(&[1, 5, 2]).unwrap();
        let drawn: Vec<u8> = (0..5).map(|_| source.draw().value()).collect();
        assert_eq!(drawn, vec![1, 5, 2, 1, 5]);
    }

    #[test]
    fn scripted_rejects_invalid_values() {
        assert_eq!(
            ScriptedSource::from_values(&[1, 0]).unwrap_err(),
            DieError::FaceOutOfRange(0)
        );
    }

    #[test]
    fn scripted_rejects_empty_script() {
        assert_eq!(
            ScriptedSource::from_values(&[]).unwrap_err(),
            DieError::EmptyScript
        );
        assert_eq!(ScriptedSource::new(vec![]).unwrap_err(), DieError::EmptyScript);
    }

    #[test]
    fn scripted_single_face_repeats() {
        let mut source = ScriptedSource::from_values(&[4]).unwrap();
        for _ in 0..3 {
            assert_eq!(source.draw().value(), 4);
        }
    }

    #[test]
    fn seeded_is_reproducible() {
        let mut a = SeededSource::new(42);
        let mut b = SeededSource::new(42);
        for _ in 0..100 {
            assert_eq!(a.draw(), b.draw());
        }
    }

    #[test]
    fn thread_rng_hits_every_face() {
        let mut source = ThreadRngSource;
        let mut seen = [false; 6];
        for _ in 0..1000 {
            seen[usize::from(source.draw().value() - 1)] = true;
        }
        assert!(seen.iter().all(|&s| s), "{seen:?}");
    }

    #[test]
    fn boxed_source_delegates() {
        let mut source: Box<dyn FaceSource> =
            Box::new(ScriptedSource::from_values(&[6]).unwrap());
        assert_eq!(source.draw().value(), 6);
    }
}
