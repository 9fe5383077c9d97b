use pres_layout::{decide_layout, plan_layout, ContentComplexity, DeviceClass, LayoutRules};

fn main() -> anyhow::Result<()> {
    // Same gallery, four very different screens
    let count = 12u32;
    let contexts = [
        (DeviceClass::Phone, 390.0),
        (DeviceClass::Tablet, 1024.0),
        (DeviceClass::Desktop, 1440.0),
        (DeviceClass::Tv, 1920.0),
    ];
    for (device, width) in contexts {
        let plan = decide_layout(count, width, device, ContentComplexity::Moderate);
        println!(
            "{:?} @ {:>6.0}pt: {} col, card {:.0}x{:.0}, gap {:.1}, anim {:.2}s",
            device, width, plan.columns, plan.card_width, plan.card_height,
            plan.spacing, plan.animation_duration
        );
    }

    // Custom rules: denser padding, tighter card ceiling
    let mut rules = LayoutRules::default();
    rules.padding = 8.0;
    rules.max_card_width = 320.0;
    rules.validate()?;
    let plan = plan_layout(count, 1440.0, DeviceClass::Desktop, ContentComplexity::Moderate, &rules);
    println!(
        "custom rules: {} col, card {:.0}x{:.0}, pad {:.0}",
        plan.columns, plan.card_width, plan.card_height, plan.padding
    );

    Ok(())
}
