use pookalam::{PlayerNode, PuzzleEngine, Session, SolverPlayer};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    pookalam::init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;

    let rng = SmallRng::seed_from_u64(seed);
    let session = Session::new(PuzzleEngine::new(), rng, 1)?;
    let mut node = PlayerNode::new(Box::new(SolverPlayer::new()), session);
    let summary = node.run()?;

    let result = json!({
        "seed": seed,
        "levels": summary.levels,
        "total_moves": summary.total_moves,
        "won": summary.won,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
