use rand::Rng;
use rand::seq::SliceRandom;

use crate::common::{checker, Result};

use std::fmt;


/// A coordinate selection oracle.
/// Each call returns the next coordinate to update.
/// A selector keeps its own state,
/// including its random source if it needs one.
pub trait CoordinateSelector {
    /// Returns the next coordinate.
    fn next_coordinate(&mut self) -> usize;
}


impl<C> CoordinateSelector for Box<C>
    where C: CoordinateSelector + ?Sized
{
    #[inline]
    fn next_coordinate(&mut self) -> usize {
        (**self).next_coordinate()
    }
}


/// Visits the coordinates in the order `1, 2, ..., d - 1, 0, 1, ...`.
/// The selector advances before returning,
/// so a sweep starts right after the initial coordinate `0`.
#[derive(Debug, Clone)]
pub struct Cyclic {
    current: usize,
    dim: usize,
}


impl Cyclic {
    /// Construct a new cyclic selector over `dim` coordinates.
    pub fn new(dim: usize) -> Result<Self> {
        checker::positive("dim", dim)?;
        Ok(Self { current: 0, dim, })
    }
}


impl CoordinateSelector for Cyclic {
    fn next_coordinate(&mut self) -> usize {
        if self.current >= self.dim - 1 {
            self.current = 0;
        } else {
            self.current += 1;
        }
        self.current
    }
}


/// Picks a coordinate uniformly at random at each call.
#[derive(Debug, Clone)]
pub struct Uniform<R> {
    dim: usize,
    rng: R,
}


impl<R: Rng> Uniform<R> {
    /// Construct a new uniform selector over `dim` coordinates
    /// that draws from `rng`.
    pub fn new(dim: usize, rng: R) -> Result<Self> {
        checker::positive("dim", dim)?;
        Ok(Self { dim, rng, })
    }
}


impl<R: Rng> CoordinateSelector for Uniform<R> {
    fn next_coordinate(&mut self) -> usize {
        self.rng.gen_range(0..self.dim)
    }
}


/// Visits the coordinates along a random permutation,
/// drawing a fresh permutation after each sweep.
/// Like [`Cyclic`], the selector advances before returning.
#[derive(Debug, Clone)]
pub struct RandomPermutation<R> {
    index: usize,
    perm: Vec<usize>,
    rng: R,
}


impl<R: Rng> RandomPermutation<R> {
    /// Construct a new selector over `dim` coordinates
    /// that shuffles with `rng`.
    pub fn new(dim: usize, mut rng: R) -> Result<Self> {
        checker::positive("dim", dim)?;
        let mut perm = (0..dim).collect::<Vec<_>>();
        perm.shuffle(&mut rng);
        Ok(Self { index: 0, perm, rng, })
    }
}


impl<R: Rng> CoordinateSelector for RandomPermutation<R> {
    fn next_coordinate(&mut self) -> usize {
        if self.index >= self.perm.len() - 1 {
            self.index = 0;
            self.perm.shuffle(&mut self.rng);
        } else {
            self.index += 1;
        }
        self.perm[self.index]
    }
}


/// Coordinate selection schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateRule {
    /// See [`Cyclic`].
    Cyclic,
    /// See [`Uniform`].
    Uniform,
    /// See [`RandomPermutation`].
    RandomPermutation,
}


impl CoordinateRule {
    /// Returns the selector of this scheme over `dim` coordinates.
    /// `rng` is dropped by the cyclic scheme.
    pub fn selector<R>(self, dim: usize, rng: R)
        -> Result<Box<dyn CoordinateSelector>>
        where R: Rng + 'static,
    {
        let selector: Box<dyn CoordinateSelector> = match self {
            Self::Cyclic => Box::new(Cyclic::new(dim)?),
            Self::Uniform => Box::new(Uniform::new(dim, rng)?),
            Self::RandomPermutation => {
                Box::new(RandomPermutation::new(dim, rng)?)
            },
        };
        Ok(selector)
    }
}


impl fmt::Display for CoordinateRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = match self {
            Self::Cyclic => "Cyclic",
            Self::Uniform => "Uniform",
            Self::RandomPermutation => "Random permutation",
        };
        write!(f, "{rule}")
    }
}
