//! Square bit masks packed into one unsigned integer, one bit per cell in
//! row-major order. `N * N` must fit in `T`; the 11×11 sea grid uses `u128`.

use core::fmt;
use core::mem;
use core::ops::{BitAnd, Not};

use num_traits::{PrimInt, Unsigned};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitBoardError {
    IndexOutOfBounds { row: usize, col: usize },
}

impl fmt::Display for BitBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitBoardError::IndexOutOfBounds { row, col } => {
                write!(f, "cell ({}, {}) is outside the board", row, col)
            }
        }
    }
}

/// An `N`×`N` set of cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BitBoard<T, const N: usize> {
    bits: T,
}

impl<T, const N: usize> BitBoard<T, N>
where
    T: PrimInt + Unsigned,
{
    const CELLS: usize = N * N;

    /// Bits that belong to the board.
    fn cells_mask() -> T {
        if Self::CELLS >= mem::size_of::<T>() * 8 {
            !T::zero()
        } else {
            (T::one() << Self::CELLS) - T::one()
        }
    }

    fn index(row: usize, col: usize) -> Result<usize, BitBoardError> {
        if row < N && col < N {
            Ok(row * N + col)
        } else {
            Err(BitBoardError::IndexOutOfBounds { row, col })
        }
    }

    pub fn new() -> Self {
        Self { bits: T::zero() }
    }

    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    pub fn get(&self, row: usize, col: usize) -> Result<bool, BitBoardError> {
        let i = Self::index(row, col)?;
        Ok((self.bits >> i) & T::one() == T::one())
    }

    pub fn set(&mut self, row: usize, col: usize) -> Result<(), BitBoardError> {
        let i = Self::index(row, col)?;
        self.bits = self.bits | (T::one() << i);
        Ok(())
    }

    /// Set cells as (row, col), in row-major order.
    pub fn iter_set_bits(&self) -> impl Iterator<Item = (usize, usize)> {
        let bits = self.bits;
        (0..Self::CELLS)
            .filter(move |&i| (bits >> i) & T::one() == T::one())
            .map(|i| (i / N, i % N))
    }
}

impl<T, const N: usize> BitAnd for BitBoard<T, N>
where
    T: PrimInt + Unsigned,
{
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self {
            bits: self.bits & rhs.bits,
        }
    }
}

/// Complement within the board; bits past `N * N` stay clear.
impl<T, const N: usize> Not for BitBoard<T, N>
where
    T: PrimInt + Unsigned,
{
    type Output = Self;

    fn not(self) -> Self {
        Self {
            bits: !self.bits & Self::cells_mask(),
        }
    }
}
