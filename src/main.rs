fn main() -> anyhow::Result<()> {
    node_finder::run()
}
