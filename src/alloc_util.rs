use alloc::vec::Vec;
use core::alloc::Layout;

use crate::error::Encoding;
use crate::{EncodingError, ErrorCode};

#[inline]
fn check_reserve_len<T>(
    len: usize,
    additional: usize,
    encoding: Encoding,
) -> Result<(), EncodingError> {
    let needed = len
        .checked_add(additional)
        .ok_or_else(|| EncodingError::resource(encoding, ErrorCode::LengthOverflow))?;
    Layout::array::<T>(needed)
        .map_err(|_| EncodingError::resource(encoding, ErrorCode::LengthOverflow))?;
    Ok(())
}

#[inline]
pub fn try_reserve_exact<T>(
    v: &mut Vec<T>,
    additional: usize,
    encoding: Encoding,
) -> Result<(), EncodingError> {
    let needed = v
        .len()
        .checked_add(additional)
        .ok_or_else(|| EncodingError::resource(encoding, ErrorCode::LengthOverflow))?;
    if needed <= v.capacity() {
        return Ok(());
    }
    check_reserve_len::<T>(v.len(), additional, encoding)?;
    v.try_reserve_exact(additional)
        .map_err(|_| EncodingError::resource(encoding, ErrorCode::AllocationFailed))
}

/// Allocate an output buffer for `input_len` source units growing by at most `growth` each.
#[inline]
pub fn try_output_vec<T>(
    input_len: usize,
    growth: usize,
    encoding: Encoding,
) -> Result<Vec<T>, EncodingError> {
    let cap = input_len
        .checked_mul(growth)
        .ok_or_else(|| EncodingError::resource(encoding, ErrorCode::LengthOverflow))?;
    let mut v = Vec::new();
    try_reserve_exact(&mut v, cap, encoding)?;
    Ok(v)
}

/// Release the unused tail of a worst-case reservation.
#[inline]
pub fn trim<T>(mut v: Vec<T>) -> Vec<T> {
    v.shrink_to_fit();
    v
}
