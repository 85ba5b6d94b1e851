use cpfs_tool_lib::{blocks_to_sized_string, parse_arguments, run};
use log::error;
use std::process::exit;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let request = match parse_arguments(std::env::args_os()) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{}", e);
            exit(e.exit_code());
        }
    };

    let report = match run(&request) {
        Ok(r) => r,
        Err(e) => {
            error!("Format of {} failed", request.disk_path);
            eprintln!("Error: {}", e);
            exit(e.exit_code());
        }
    };

    println!(
        "Quick format of CPFS completed successfully: {} blocks ({}), journal at blocks {}-{}, root directory at block {}.",
        report.superblock().block_count(),
        blocks_to_sized_string(report.superblock().block_count() as u64),
        report.superblock().journal_start(),
        report.superblock().first_free_block() - 1,
        report.root().block_num()
    );
}
