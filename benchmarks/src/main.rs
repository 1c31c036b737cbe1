// Benchmark suite entry point

fn main() {
    println!("perceptron-rs Benchmark Suite");
    println!();
    println!("Usage:");
    println!("  cargo bench --package benchmarks");
    println!("  cargo bench --package benchmarks --bench perceptron -- <filter>");
    println!();
    println!("Available benchmark groups:");
    println!("  - classify: single-sample classification");
    println!("  - learn: single perceptron update");
    println!("  - finite_set: one pass over a fixed training set");
    println!("  - performance_goal: online training to a target accuracy");
    println!();
    println!("To collect iteration counts across seeds and targets:");
    println!("  cargo run --package benchmarks --bin collect_metrics");
    println!();
    println!("Brightness demo (exits non-zero below 98% accuracy):");
    println!("  cargo run --package benchmarks --bin color_brightness [seed]");
}
