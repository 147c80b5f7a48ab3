use crate::config::WofpConfig;
use crate::error::WofpError;
use crate::fp::{build_frequency_table, rules_to_map, transactions_from_matrix, wofp_algorithm};
use numpy::PyReadonlyArray2;
use pyo3::exceptions::{PyOSError, PyValueError};
use pyo3::{pymodule, types::PyModule, Bound, PyErr, PyResult};
use std::collections::{BTreeMap, HashMap};

fn to_py_err(err: WofpError) -> PyErr {
    match err {
        WofpError::Io(e) => PyOSError::new_err(e.to_string()),
        other => PyValueError::new_err(other.to_string()),
    }
}

fn run(
    transactions: &[Vec<String>],
    weights: &HashMap<String, f64>,
    config: WofpConfig,
    cross_category: bool,
) -> PyResult<BTreeMap<String, f64>> {
    let result = wofp_algorithm(transactions, weights, &config).map_err(to_py_err)?;
    let rules = if cross_category {
        &result.cross_category_rules
    } else {
        &result.rules
    };
    Ok(rules_to_map(rules))
}

#[pymodule]
fn wofp<'py>(m: &Bound<'py, PyModule>) -> PyResult<()> {
    #[pyfn(m)]
    #[pyo3(name = "frequency_table")]
    fn frequency_table_py(
        transactions: Vec<Vec<String>>,
        weights: HashMap<String, f64>,
        min_support: f64,
    ) -> PyResult<(Vec<(String, f64)>, Vec<f64>)> {
        let (table, transaction_weights) =
            build_frequency_table(&transactions, &weights, min_support).map_err(to_py_err)?;
        let items = table
            .items()
            .iter()
            .map(|entry| (entry.item.clone(), entry.support))
            .collect();
        Ok((items, transaction_weights))
    }

    #[pyfn(m)]
    #[pyo3(
        name = "wofp_mine",
        signature = (transactions, weights, min_support, min_weight, prefix_length = 2, cross_category = true)
    )]
    fn wofp_mine_py(
        transactions: Vec<Vec<String>>,
        weights: HashMap<String, f64>,
        min_support: f64,
        min_weight: f64,
        prefix_length: usize,
        cross_category: bool,
    ) -> PyResult<BTreeMap<String, f64>> {
        let config = WofpConfig::new(min_support, min_weight).with_prefix_length(prefix_length);
        run(&transactions, &weights, config, cross_category)
    }

    #[pyfn(m)]
    #[pyo3(
        name = "wofp_mine_matrix",
        signature = (matrix, columns, weights, min_support, min_weight, prefix_length = 2, cross_category = true)
    )]
    fn wofp_mine_matrix_py<'py>(
        matrix: PyReadonlyArray2<'py, i32>,
        columns: Vec<String>,
        weights: HashMap<String, f64>,
        min_support: f64,
        min_weight: f64,
        prefix_length: usize,
        cross_category: bool,
    ) -> PyResult<BTreeMap<String, f64>> {
        let transactions = transactions_from_matrix(matrix.as_array(), &columns).map_err(to_py_err)?;
        let config = WofpConfig::new(min_support, min_weight).with_prefix_length(prefix_length);
        run(&transactions, &weights, config, cross_category)
    }

    Ok(())
}
