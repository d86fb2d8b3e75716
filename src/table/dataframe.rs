use polars::prelude::*;

use super::Table;

/// Conversion of downloaded tables into Polars DataFrames.
pub trait ToDataFrame {
    /// Converts the object into a Polars DataFrame.
    fn to_dataframe(&self) -> PolarsResult<DataFrame>;
}

impl ToDataFrame for Table {
    /// One nullable string column per header; missing cells are null.
    fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        let columns = self
            .headers()
            .iter()
            .enumerate()
            .map(|(idx, name)| {
                let cells: Vec<Option<&str>> = self
                    .rows()
                    .iter()
                    .map(|row| row.values()[idx].as_deref())
                    .collect();
                Column::new(name.as_str().into(), cells)
            })
            .collect::<Vec<_>>();
        DataFrame::new(columns)
    }
}
