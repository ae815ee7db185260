// src/grid/table.rs
//! Column-oriented storage for grid sweep results
//!
//! One row per priced grid point, in sweep order. Columns are appended in
//! lockstep while the sweep runs and the table is immutable once returned;
//! only the engine can push rows.

use ndarray::Array2;

/// Column names of a [`ResultTable`], in stored order.
pub const COLUMN_NAMES: [&str; 7] = ["price", "S", "K", "T", "sigma", "r", "call_option"];

/// Priced scenarios from one grid sweep
///
/// Column-oriented: each accessor returns a full column as a slice. Row
/// `i` of every column belongs to the same grid point. The `call_option`
/// column is an integer flag (1 = call, 0 = put) mirroring the sweep's
/// shared kind on every row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultTable {
    price: Vec<f64>,
    s: Vec<f64>,
    k: Vec<f64>,
    t: Vec<f64>,
    sigma: Vec<f64>,
    r: Vec<f64>,
    call_option: Vec<u8>,
}

/// One materialized row of a [`ResultTable`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableRow {
    pub price: f64,
    pub s: f64,
    pub k: f64,
    pub t: f64,
    pub sigma: f64,
    pub r: f64,
    pub call_option: u8,
}

impl ResultTable {
    pub(crate) fn with_capacity(rows: usize) -> Self {
        ResultTable {
            price: Vec::with_capacity(rows),
            s: Vec::with_capacity(rows),
            k: Vec::with_capacity(rows),
            t: Vec::with_capacity(rows),
            sigma: Vec::with_capacity(rows),
            r: Vec::with_capacity(rows),
            call_option: Vec::with_capacity(rows),
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub(crate) fn push_row(
        &mut self,
        price: f64,
        s: f64,
        k: f64,
        t: f64,
        sigma: f64,
        r: f64,
        call_option: u8,
    ) {
        self.price.push(price);
        self.s.push(s);
        self.k.push(k);
        self.t.push(t);
        self.sigma.push(sigma);
        self.r.push(r);
        self.call_option.push(call_option);
    }

    /// Number of rows (priced grid points)
    pub fn len(&self) -> usize {
        self.price.len()
    }

    pub fn is_empty(&self) -> bool {
        self.price.is_empty()
    }

    /// Computed option prices, one per grid point
    pub fn prices(&self) -> &[f64] {
        &self.price
    }

    /// Spot price column (S)
    pub fn spots(&self) -> &[f64] {
        &self.s
    }

    /// Strike price column (K)
    pub fn strikes(&self) -> &[f64] {
        &self.k
    }

    /// Time-to-expiry column in years (T)
    pub fn expiries(&self) -> &[f64] {
        &self.t
    }

    /// Volatility column (sigma)
    pub fn sigmas(&self) -> &[f64] {
        &self.sigma
    }

    /// Risk-free rate column (r)
    pub fn rates(&self) -> &[f64] {
        &self.r
    }

    /// Call/put flag column: 1 for calls, 0 for puts
    pub fn call_flags(&self) -> &[u8] {
        &self.call_option
    }

    /// Row at `index`, or `None` past the end
    pub fn row(&self, index: usize) -> Option<TableRow> {
        if index >= self.len() {
            return None;
        }
        Some(TableRow {
            price: self.price[index],
            s: self.s[index],
            k: self.k[index],
            t: self.t[index],
            sigma: self.sigma[index],
            r: self.r[index],
            call_option: self.call_option[index],
        })
    }

    /// Iterate rows in sweep order
    pub fn rows(&self) -> impl Iterator<Item = TableRow> + '_ {
        (0..self.len()).map(move |i| TableRow {
            price: self.price[i],
            s: self.s[i],
            k: self.k[i],
            t: self.t[i],
            sigma: self.sigma[i],
            r: self.r[i],
            call_option: self.call_option[i],
        })
    }

    /// Dense `rows x 7` matrix of the table, columns in [`COLUMN_NAMES`] order
    ///
    /// The call/put flag is widened to `f64` so the whole table fits one
    /// numeric array for downstream analysis.
    pub fn to_array(&self) -> Array2<f64> {
        let mut out = Array2::zeros((self.len(), COLUMN_NAMES.len()));
        for (i, row) in self.rows().enumerate() {
            out[[i, 0]] = row.price;
            out[[i, 1]] = row.s;
            out[[i, 2]] = row.k;
            out[[i, 3]] = row.t;
            out[[i, 4]] = row.sigma;
            out[[i, 5]] = row.r;
            out[[i, 6]] = row.call_option as f64;
        }
        out
    }
}
