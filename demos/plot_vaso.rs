//! Prints the tissue and blood Mz curves of Huber (2014) Fig. 3.2C as a
//! terminal plot. Pass a JSON file with `{"tr": .., "ti1": .., "ti2": ..}`
//! as the first argument to plot a different timing.

use vasosim::{PulseEvent, SequenceTiming, VasoSequence};

fn main() {
    let timing = match std::env::args().nth(1) {
        Some(path) => {
            let source = std::fs::read_to_string(path).unwrap();
            serde_json::from_str(&source).unwrap()
        }
        None => SequenceTiming {
            tr: 2.0,
            ti1: 1.45561,
            ti2: 1.7,
        },
    };

    let seq = VasoSequence::new(timing).unwrap();
    let max_time = 5.0 * seq.cycle();

    let plot_width = 80;
    let plot_height = 24;

    let time: Vec<f64> = (0..plot_width)
        .map(|i| (i as f64 + 0.5) / plot_width as f64 * max_time)
        .collect();
    let signals = seq.simulate(&time, 1.9, 2.1).unwrap();

    for i in 0..=plot_height {
        let y = 1.0 - 2.0 * (i as f64 / plot_height as f64);
        print!("{y:-6.2} | ");

        for j in 0..signals.len() {
            let half_row = 1.0 / plot_height as f64;
            if (signals.tissue[j] - y).abs() < half_row {
                print!("#");
            } else if (signals.blood[j] - y).abs() < half_row {
                print!("o");
            } else if y.abs() < half_row {
                print!("-");
            } else {
                print!(" ");
            }
        }
        println!()
    }

    let inversions = seq.events(PulseEvent::Inversion, 0.0, max_time, usize::MAX);
    let first = seq.events(PulseEvent::FirstExcitation, 0.0, max_time, usize::MAX);
    let second = seq.events(PulseEvent::SecondExcitation, 0.0, max_time, usize::MAX);
    println!("tissue: #   blood: o   time range: [0, {max_time}] s");
    println!("180° pulses at {inversions:.2?} s");
    println!("90° pulses at {first:.2?} and {second:.2?} s");
}
