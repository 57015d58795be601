fn main() -> eyre::Result<()> {
    tenauth_service::main()
}
