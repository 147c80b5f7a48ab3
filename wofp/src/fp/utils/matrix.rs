use crate::error::{Result, WofpError};
use crate::fp::frequency::Transaction;
use ndarray::ArrayView2;

/// Converts a one-hot transaction matrix into item sets.
///
/// Row `i` becomes the labels of every non-zero column of that row.
pub fn transactions_from_matrix(
    matrix: ArrayView2<i32>,
    columns: &[String],
) -> Result<Vec<Transaction>> {
    let num_items = matrix.shape()[1];
    if num_items != columns.len() {
        return Err(WofpError::InvalidInput(format!(
            "matrix has {} columns but {} labels were given",
            num_items,
            columns.len()
        )));
    }

    Ok(matrix
        .rows()
        .into_iter()
        .map(|row| {
            row.iter()
                .zip(columns)
                .filter(|&(&flag, _)| flag != 0)
                .map(|(_, label)| label.clone())
                .collect()
        })
        .collect())
}
