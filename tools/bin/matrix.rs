use adaptive_presentation::{
    decide_layout, photo_policy, ContentComplexity, DeviceClass, Extent, PhotoContext,
    PhotoPurpose,
};

/// Audit sweep over the full decision space
///
/// Time complexity: O(devices * complexities + purposes) for the printed
/// tables, plus O(devices * complexities * counts * widths) for the bounds
/// audit. Everything is pure arithmetic; the sweep finishes instantly.
///
/// Missing functionality: Could emit CSV for spreadsheet diffing, but
/// currently prints human-oriented tables only.
fn main() {
    println!("Presentation Policy Matrix");
    println!("═══════════════════════════════════");

    // One representative width per device class
    let contexts = [
        (DeviceClass::Phone, 390.0),
        (DeviceClass::Tablet, 1024.0),
        (DeviceClass::Desktop, 1440.0),
        (DeviceClass::Watch, 198.0),
        (DeviceClass::Tv, 1920.0),
        (DeviceClass::Car, 800.0),
        (DeviceClass::Vision, 1280.0),
    ];
    let count = 12;

    println!();
    println!("Layout ({} items):", count);
    println!("──────────────────────");
    println!(
        "{:<10} {:>7} {:>14} {:>8} {:>12} {:>8} {:>7}",
        "device", "width", "complexity", "columns", "card", "spacing", "anim"
    );
    for (device, width) in contexts {
        for complexity in ContentComplexity::ALL {
            let plan = decide_layout(count, width, device, complexity);
            println!(
                "{:<10} {:>7.0} {:>14} {:>8} {:>5.0}x{:<6.0} {:>8.1} {:>6.2}s",
                format!("{:?}", device),
                width,
                format!("{:?}", complexity),
                plan.columns,
                plan.card_width,
                plan.card_height,
                plan.spacing,
                plan.animation_duration
            );
        }
    }

    // Bounds audit across a coarse input grid
    let mut checked = 0u32;
    let mut violations = 0u32;
    for device in DeviceClass::ALL {
        for complexity in ContentComplexity::ALL {
            for item_count in [0u32, 1, 2, 5, 12, 60, 500] {
                for width in [0.0f32, 160.0, 390.0, 1024.0, 1440.0, 1920.0, 3840.0] {
                    let plan = decide_layout(item_count, width, device, complexity);
                    checked += 1;
                    let ok = plan.columns >= 1
                        && (200.0..=400.0).contains(&plan.card_width)
                        && plan.card_height.is_finite()
                        && plan.card_height > 0.0
                        && plan.expansion_scale >= 1.0
                        && plan.animation_duration > 0.0;
                    if !ok {
                        violations += 1;
                        println!(
                            "VIOLATION: {:?}/{:?} count={} width={} -> {:?}",
                            device, complexity, item_count, width, plan
                        );
                    }
                }
            }
        }
    }

    println!();
    println!("Bounds audit:");
    println!("───────────────");
    println!("Decisions checked: {}", checked);
    println!("Bound violations: {}", violations);

    // Photo strategy sweep on a fully capable phone
    let tight = PhotoContext {
        available_space: Extent::new(5.0, 100.0),
        screen_size: Extent::new(100.0, 100.0),
        ..PhotoContext::default()
    };
    let roomy = PhotoContext {
        available_space: Extent::new(50.0, 100.0),
        screen_size: Extent::new(100.0, 100.0),
        ..PhotoContext::default()
    };

    println!();
    println!("Photo Policy (phone, both sources, baseline 0.80):");
    println!("─────────────────────────────────────────────────────");
    println!(
        "{:<14} {:>9} {:>12} {:>12} {:>6} {:>8} {:>6}",
        "purpose", "capture", "tight", "roomy", "edit", "quality", "auto"
    );
    for purpose in PhotoPurpose::ALL {
        let policy_tight = photo_policy(purpose, &tight);
        let policy_roomy = photo_policy(purpose, &roomy);
        println!(
            "{:<14} {:>9} {:>12} {:>12} {:>6} {:>8.2} {:>6}",
            format!("{:?}", purpose),
            format!("{:?}", policy_tight.capture),
            format!("{:?}", policy_tight.display),
            format!("{:?}", policy_roomy.display),
            if policy_tight.editing_enabled { "yes" } else { "no" },
            policy_tight.compression_quality,
            if policy_tight.auto_optimize { "yes" } else { "no" }
        );
    }

    println!();
    println!("Key Takeaways:");
    println!("─────────────────");
    println!("• Every device class keeps columns >= 1 and cards within 200-400 pt");
    println!("• Complexity widens spacing and cards' aspect, never motion timing");
    println!("• Evidentiary purposes never offer editing and bias toward the camera");
    println!("• Extraction purposes (receipts, pump, odometer) auto-optimize");
}
