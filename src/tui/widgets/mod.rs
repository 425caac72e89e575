pub mod field_row;
pub mod flex;

#[cfg(test)]
pub mod testing;

pub use field_row::{render_button, render_row, RowValue, ROW_MARGIN};
pub use flex::{Flex, BASE_GAP};
