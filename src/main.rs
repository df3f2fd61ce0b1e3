fn main() -> Result<(), Box<dyn std::error::Error>> {
    adagio::runtime::run()
}
