use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use clockface::{ClockCommand, ClockFace, ClockFaceConfig, ClockTime, Color};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Styled clock built with the generated builder
    let config = ClockFaceConfig::builder()
        .title("Fast clock".to_string())
        .face_fill_color(Color::new(0x10, 0x18, 0x20))
        .sec_hand_color(Color::new(0xff, 0x40, 0x40))
        .sec_hand_len_ratio(0.9)
        .build();

    let (sender, receiver) = mpsc::channel();

    // Drive the clock from a synthetic ticker running 60x faster than wall
    // time, so a full hour passes every minute.
    thread::spawn(move || {
        let mut millis_of_day: u64 = 0;
        loop {
            let time = ClockTime {
                hours: (millis_of_day / 3_600_000 % 24) as u32,
                minutes: (millis_of_day / 60_000 % 60) as u32,
                seconds: (millis_of_day / 1_000 % 60) as u32,
                millis: (millis_of_day % 1_000) as u32,
            };
            if sender.send(ClockCommand::SetTime(time)).is_err() {
                break;
            }
            millis_of_day += 3_000;
            thread::sleep(Duration::from_millis(50));
        }
    });

    println!("Displaying a clock driven by an external ticker at 60x speed.");
    println!("Close the window to exit; the ticker stops with it.");

    ClockFace::new(config).show_with_ticker(receiver)?;
    Ok(())
}
