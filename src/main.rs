fn main() -> anyhow::Result<()> {
    custodia::cli::run_cli()
}
