// demos/demo.rs
use bs_grid::analytics::bs_analytic::{bs_call_price, OptionKind};
use bs_grid::grid::grid_engine::{simulate_grid, GridSpec};
use bs_grid::math_utils::Timer;

fn main() {
    println!("Running bs-grid sweep demo\n");

    let spec = GridSpec {
        s_values: (80..=120).step_by(5).map(|s| s as f64).collect(),
        k_values: vec![90.0, 100.0, 110.0],
        t_values: vec![0.25, 0.5, 1.0, 2.0],
        sigma_values: vec![0.1, 0.2, 0.3, 0.4],
        r_values: vec![0.0, 0.01, 0.05],
        kind: OptionKind::Call,
    };

    if let Err(err) = spec.validate() {
        eprintln!("Invalid grid: {}", err);
        std::process::exit(1);
    }

    println!("Grid points: {}", spec.num_points());

    let mut timer = Timer::new();
    timer.start();
    let table = simulate_grid(&spec);
    let elapsed_ms = timer.elapsed_ms();

    println!(
        "Swept {} scenarios in {:.2} ms ({:.0} prices/sec)\n",
        table.len(),
        elapsed_ms,
        table.len() as f64 / (elapsed_ms / 1000.0)
    );

    println!(
        "{:>10} {:>8} {:>8} {:>6} {:>7} {:>6} {:>12}",
        "price", "S", "K", "T", "sigma", "r", "call_option"
    );
    for row in table.rows().take(10) {
        println!(
            "{:>10.4} {:>8.1} {:>8.1} {:>6.2} {:>7.2} {:>6.2} {:>12}",
            row.price, row.s, row.k, row.t, row.sigma, row.r, row.call_option
        );
    }
    println!("... ({} rows total)\n", table.len());

    // Cross-check one ATM cell against the scalar pricer
    let atm = bs_call_price(100.0, 100.0, 0.05, 0.2, 1.0);
    println!(
        "ATM scalar check (S=K=100, T=1, sigma=0.2, r=0.05): {:.4}",
        atm
    );

    let matrix = table.to_array();
    println!(
        "Dense export: {} x {} matrix ready for analysis",
        matrix.nrows(),
        matrix.ncols()
    );
}
