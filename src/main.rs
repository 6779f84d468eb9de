use clap::Parser;
use hive_core::prelude::*;

/// Plays a game of Hive from newline-delimited commands read on stdin.
///
/// Each line is either `place <q> <r> <kind>` or `move <fq> <fr> <tq> <tr>`.
/// This binary is a host, not part of the engine: it owns all I/O and drives
/// the crate purely through its public operations.
#[derive(Parser, Debug)]
#[command(name = "hive-cli", about = "Plays a game of Hive from a script of moves read on stdin")]
struct Cli
{
    /// Log level passed through to `env_logger` (error, warn, info, debug, trace).
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main()
{
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level.clone())).init();

    let mut game = Game::init();
    print_board(&game);

    for line in std::io::stdin().lines()
    {
        let Ok(line) = line
        else
        {
            break;
        };
        let line = line.trim();
        if line.is_empty()
        {
            continue;
        }

        if apply_command(&mut game, line)
        {
            print_board(&game);
        }
        else
        {
            println!("rejected: {line}");
        }

        match game.completion_state()
        {
            | CompletionState::Incomplete => {}
            | other =>
            {
                println!("game over: {other}");
                break;
            }
        }
    }
}

fn apply_command(game: &mut Game, line: &str) -> bool
{
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice()
    {
        | ["place", q, r, kind] =>
        {
            let (Ok(q), Ok(r)) = (q.parse(), r.parse())
            else
            {
                return false;
            };
            let Some(kind) = parse_kind(kind)
            else
            {
                return false;
            };
            game.place(q, r, kind)
        }
        | ["move", fq, fr, tq, tr] =>
        {
            let (Ok(fq), Ok(fr), Ok(tq), Ok(tr)) = (fq.parse(), fr.parse(), tq.parse(), tr.parse())
            else
            {
                return false;
            };
            game.move_piece(Hex::new(fq, fr), Hex::new(tq, tr))
        }
        | _ => false,
    }
}

fn parse_kind(s: &str) -> Option<Kind>
{
    match s
    {
        | "queen" => Some(Kind::Queen),
        | "ant" => Some(Kind::Ant),
        | "grasshopper" => Some(Kind::Grasshopper),
        | "spider" => Some(Kind::Spider),
        | "beetle" => Some(Kind::Beetle),
        | "ladybug" => Some(Kind::Ladybug),
        | "mosquito" => Some(Kind::Mosquito),
        | _ => None,
    }
}

fn print_board(game: &Game)
{
    println!("move {} - {} to play", game.move_number(), game.color_to_move());
    for tile in game.tiles()
    {
        println!("  {} {} at {} (height {})", tile.color, tile.kind, tile.position, tile.stack_height);
    }
}
