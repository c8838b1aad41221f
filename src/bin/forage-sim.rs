use forage::harness;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    harness::run()
}
