use sentiment_analyzer::app;

fn main() -> anyhow::Result<()> {
    app::main()
}
