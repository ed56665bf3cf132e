use anyhow::Result;

fn main() -> Result<()> {
    done::cli::run()
}
