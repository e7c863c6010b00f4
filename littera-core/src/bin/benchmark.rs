fn main() {
    if let Err(e) = run() {
        eprintln!("benchmark failed: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    use littera_core::Transliterator;
    use std::time::{Duration, Instant};

    #[derive(Debug)]
    struct Args {
        iterations: usize,
    }

    fn parse_args() -> Result<Args, String> {
        let mut iterations: usize = 10_000;

        let mut it = std::env::args().skip(1);
        while let Some(arg) = it.next() {
            match arg.as_str() {
                "--iterations" => {
                    let Some(v) = it.next() else {
                        return Err("missing value for --iterations".into());
                    };
                    iterations = v
                        .parse::<usize>()
                        .map_err(|_| "invalid value for --iterations".to_string())?
                        .clamp(1, 1_000_000);
                }
                "--help" | "-h" => {
                    println!("usage: benchmark [--iterations N]");
                    std::process::exit(0);
                }
                other => return Err(format!("unknown argument: {other}")),
            }
        }

        Ok(Args { iterations })
    }

    // One line per script family the built-in table covers, plus the ASCII
    // fast path and the flattener fallback.
    static SAMPLES: &[(&str, &str)] = &[
        ("ascii", "The quick brown fox jumps over the lazy dog 0123456789"),
        ("cyrillic", "Съешь же ещё этих мягких французских булок"),
        ("greek", "Η γρήγορη αλεπού πηδά πάνω από τον τεμπέλη σκύλο"),
        ("hebrew", "שלום עולם, הודעה חדשה מהשעון"),
        ("arabic", "مرحبا بالعالم، رسالة جديدة وصلت"),
        ("latin_mixed", "Ärger med smørrebrød på Øresund"),
        ("flattener", "Crème brûlée à la façon grand-mère"),
    ];

    let args = parse_args()?;
    let transliterator = Transliterator::new();

    println!("littera transliteration benchmark");
    println!("iterations per sample: {}", args.iterations);
    println!();

    let mut total_chars = 0usize;
    let mut total_elapsed = Duration::ZERO;

    for (label, text) in SAMPLES {
        // Warm-up call keeps lazy table construction out of the numbers.
        let preview = transliterator.transliterate(text);

        let start = Instant::now();
        for _ in 0..args.iterations {
            std::hint::black_box(transliterator.transliterate(std::hint::black_box(text)));
        }
        let elapsed = start.elapsed();

        total_chars += text.chars().count() * args.iterations;
        total_elapsed += elapsed;

        let per_call_us = elapsed.as_secs_f64() * 1e6 / args.iterations as f64;
        println!("{label:>12}  {per_call_us:>8.2} us/call  {preview}");
    }

    println!();
    println!(
        "overall throughput: {:.1} Mchars/s",
        total_chars as f64 / total_elapsed.as_secs_f64() / 1e6
    );
    Ok(())
}
