//! Cell value conversion utilities.

/// Trait for converting test values into raw cell bytes, using the same
/// big-endian layout the codec writes.
pub trait IntoCell {
    fn into_cell(self) -> Vec<u8>;
}

impl IntoCell for Vec<u8> {
    fn into_cell(self) -> Vec<u8> {
        self
    }
}

impl IntoCell for &[u8] {
    fn into_cell(self) -> Vec<u8> {
        self.to_vec()
    }
}

impl IntoCell for &str {
    fn into_cell(self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }
}

impl IntoCell for String {
    fn into_cell(self) -> Vec<u8> {
        self.into_bytes()
    }
}

impl IntoCell for bool {
    fn into_cell(self) -> Vec<u8> {
        vec![u8::from(self)]
    }
}

macro_rules! into_cell_be {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoCell for $ty {
                fn into_cell(self) -> Vec<u8> {
                    self.to_be_bytes().to_vec()
                }
            }
        )*
    };
}

into_cell_be!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

impl IntoCell for isize {
    fn into_cell(self) -> Vec<u8> {
        (self as i64).into_cell()
    }
}

impl IntoCell for usize {
    fn into_cell(self) -> Vec<u8> {
        (self as u64).into_cell()
    }
}
