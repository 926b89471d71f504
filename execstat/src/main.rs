fn main() -> anyhow::Result<()> {
    execstat::run()
}
