//! # Training a small MLP with manual gradient descent
//!
//! Builds a 3 -> 4 -> 4 -> 1 network on a single tape, fits it to four
//! hand-written samples with a squared-error loss and updates every
//! parameter in place with `set_data`. After each step the tape is truncated
//! back to the parameters, so memory stays flat however long it trains.
//!
//! Run with:
//! `cargo run --example train_mlp`

use gradrust_core::nn::{Mlp, Module};
use gradrust_core::{GradRustError, Tape, Value};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn squared_error(tape: &Tape<f64>, preds: &[Value<f64>], targets: &[f64]) -> Result<Value<f64>, GradRustError> {
    let mut loss = tape.leaf(0.0);
    for (pred, &target) in preds.iter().zip(targets) {
        loss = loss.add(pred.sub(target)?.pow(2.0)?)?;
    }
    Ok(loss)
}

fn main() -> Result<(), GradRustError> {
    let tape = Tape::<f64>::new();
    let mut rng = StdRng::seed_from_u64(1337);
    let mlp = Mlp::new(&tape, 3, &[4, 4, 1], &mut rng)?;
    println!("{}", mlp);
    println!("{} parameters", mlp.parameters().len());

    let xs = [
        [2.0, 3.0, -1.0],
        [3.0, -1.0, 0.5],
        [0.5, 1.0, 1.0],
        [1.0, 1.0, -1.0],
    ];
    let ys = [1.0, -1.0, -1.0, 1.0];
    let learning_rate = 0.05;
    let num_epochs = 50;
    // Everything recorded after this point is per-step and gets truncated.
    let mark = tape.len();

    for epoch in 0..num_epochs {
        let mut preds = Vec::with_capacity(xs.len());
        for x in &xs {
            preds.push(mlp.forward(&tape.leaves(x))?.into_scalar()?);
        }
        let loss = squared_error(&tape, &preds, &ys)?;

        mlp.zero_grad();
        loss.backward();
        for p in mlp.parameters() {
            p.set_data(p.data() - learning_rate * p.grad())?;
        }

        if epoch % 10 == 0 || epoch + 1 == num_epochs {
            println!(
                "Epoch [{}/{}], Loss: {:.4}, tape size: {}",
                epoch + 1,
                num_epochs,
                loss.data(),
                tape.len()
            );
        }
        tape.truncate(mark);
    }

    for (x, y) in xs.iter().zip(ys) {
        let pred = mlp.forward(&tape.leaves(x))?.into_scalar()?;
        println!("{:?} -> {:.4} (target {})", x, pred.data(), y);
    }
    Ok(())
}
