fn main() -> anyhow::Result<()> {
    petstore::cli::run_cli()
}
