//! Departure Signal Trainer
//!
//! This example walks through both ways of driving the signal head.
//!
//! Key concepts:
//! - Lamp-first: set lamps one at a time and watch the aspect label
//! - Aspect-first: pick an aspect and watch all lamps follow
//! - Colors a lamp cannot show are rejected
//! - The view model a UI would draw from
//!
//! Run with: cargo run --example departure_signal

use departure_signal::core::{LampColor, LampPosition, SignalAspect};
use departure_signal::display::{DisplayName, Locale};
use departure_signal::widget::{DepartureSignal, SignalView};

fn print_view(view: &SignalView) {
    for lamp in &view.lamps {
        println!("  {:<7} {:<7} {}", lamp.label, lamp.color_name, lamp.swatch.hex());
    }
    println!("  Aspect: {}", view.aspect_label);
}

fn main() {
    println!("=== Departure Signal Trainer ===\n");

    let mut signal = DepartureSignal::builder()
        .locale(Locale::English)
        .build()
        .unwrap();

    println!("Initial signal head:");
    print_view(&signal.view());

    println!("\n-- Lamp-first --");
    let edits = [
        (LampPosition::First, LampColor::Yellow),
        (LampPosition::Fourth, LampColor::Green),
        (LampPosition::Fourth, LampColor::Yellow),
    ];
    for (position, color) in edits {
        let update = signal.set_lamp(position, color).unwrap();
        println!(
            "Set {} to {:<6} -> {}",
            position,
            color.display_name(Locale::English),
            update
                .aspect
                .map(|a| a.display_name(Locale::English))
                .unwrap_or(signal.config().placeholder.as_str())
        );
    }

    println!("\nLamp 2 only shows red:");
    match signal.set_lamp(LampPosition::Second, LampColor::Green) {
        Ok(_) => println!("  unexpectedly accepted"),
        Err(err) => println!("  rejected: {err}"),
    }

    println!("\n-- Aspect-first --");
    for aspect in SignalAspect::ALL {
        signal.select_aspect(Some(aspect)).unwrap();
        let lamps: Vec<_> = signal
            .lamps()
            .iter()
            .map(|(_, color)| color.display_name(Locale::English))
            .collect();
        println!("{:<24} {:?}", aspect.display_name(Locale::English), lamps);
    }

    println!("\nFinal signal head:");
    print_view(&signal.view());

    println!("\nChanges recorded: {}", signal.history().len());

    println!("\n=== Example Complete ===");
}
