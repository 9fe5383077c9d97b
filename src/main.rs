use adaptive_presentation::{
    photo_policy, plan_layout, ContentComplexity, DeviceCapabilities, DeviceClass, Extent,
    LayoutRules, PhotoContext, PhotoPurpose, SourcePreference, UserPreferences,
};
use anyhow::Result;
use clap::Parser;

/// Minimal, human-friendly presentation policy probe:
/// - layout: grid/sizing/motion plan for a device and content load
/// - photo: capture/display/treatment bundle for a photo purpose
#[derive(Parser, Debug)]
#[command(name = "decide")]
#[command(about = "📐 Resolve presentation policy for a device context")]
#[command(long_about = "Resolve the presentation policy a renderer would apply for a given context.
Runs the same pure decision functions the UI layers consult, so a decision can be
inspected or diffed from the command line without spinning up any interface.")]
struct Args {
    /// Decision family to run (positional)
    #[arg(default_value = "layout", help = "Which decision to run: layout or photo")]
    mode: String,

    /// Number of content cards
    #[arg(short, long, default_value_t = 12,
          help = "How many content items the grid must hold")]
    count: u32,

    /// Screen size in points
    #[arg(short, long, default_value = "390x844",
          help = "Screen size as WIDTHxHEIGHT in points, e.g. 1440x900")]
    screen: String,

    /// Device class to decide for
    #[arg(short, long, value_enum, default_value = "phone",
          help = "Device class: phone, tablet, desktop, watch, tv, car, vision")]
    device: DeviceClass,

    /// Content complexity tier
    #[arg(long, value_enum, default_value = "moderate",
          help = "Content complexity: simple, moderate, complex, very-complex, advanced")]
    complexity: ContentComplexity,

    /// Photo purpose (photo mode only)
    #[arg(short, long, value_enum, default_value = "vehicle-photo",
          help = "What the photo is for, e.g. fuel-receipt, odometer, profile")]
    purpose: PhotoPurpose,

    /// Space available to the photo (photo mode only)
    #[arg(long, default_value = "320x240",
          help = "Space the hosting view gives the photo, as WIDTHxHEIGHT")]
    space: String,

    /// User's preferred capture source
    #[arg(long, value_enum, default_value = "either",
          help = "Preferred capture source: camera, library, either")]
    prefer: SourcePreference,

    /// Edge padding override (layout mode only)
    #[arg(long, help = "Override the edge padding in points")]
    padding: Option<f32>,

    /// Card width floor override (layout mode only)
    #[arg(long, help = "Override the minimum card width in points")]
    min_card: Option<f32>,

    /// Card width ceiling override (layout mode only)
    #[arg(long, help = "Override the maximum card width in points")]
    max_card: Option<f32>,

    /// Compression quality baseline
    #[arg(long, default_value = "0.8",
          help = "Compression quality starting point, 0.0 to 1.0")]
    baseline: String,

    /// Declare the device camera-less
    #[arg(long, help = "Decide as if the device had no camera")]
    no_camera: bool,

    /// Declare the device library-less
    #[arg(long, help = "Decide as if the device had no photo library")]
    no_library: bool,

    /// Declare the device unable to edit photos
    #[arg(long, help = "Decide as if the device could not edit photos")]
    no_editing: bool,

    /// User disallows photo editing
    #[arg(long, help = "Decide as if the user had disabled photo editing")]
    keep_original: bool,

    /// Emit JSON instead of the report
    #[arg(long, help = "Print the decision as JSON for scripting")]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let (screen_w, screen_h) = parse_extent(&args.screen)?;
    let baseline = parse_baseline(&args.baseline)?;

    match args.mode.to_lowercase().as_str() {
        "layout" => run_layout(&args, screen_w),
        "photo" => run_photo(&args, baseline, screen_w, screen_h),
        other => Err(anyhow::anyhow!(
            "Invalid mode: {}. Use 'layout' or 'photo'",
            other
        )),
    }
}

fn run_layout(args: &Args, screen_w: f32) -> Result<()> {
    let mut rules = LayoutRules::default();
    if let Some(padding) = args.padding {
        rules.padding = padding;
    }
    if let Some(min_card) = args.min_card {
        rules.min_card_width = min_card;
    }
    if let Some(max_card) = args.max_card {
        rules.max_card_width = max_card;
    }
    rules.validate()?;

    let plan = plan_layout(args.count, screen_w, args.device, args.complexity, &rules);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    println!("Layout Decision");
    println!("═══════════════════");
    println!(
        "Context: {:?}, {} items, {}pt wide, {:?} complexity",
        args.device, args.count, screen_w, args.complexity
    );
    println!();
    println!("Grid:");
    println!("───────");
    println!("Columns: {}", plan.columns);
    println!("Spacing: {:.1} pt", plan.spacing);
    println!("Card: {:.1} x {:.1} pt", plan.card_width, plan.card_height);
    println!("Padding: {:.0} pt", plan.padding);
    println!();
    println!("Motion:");
    println!("─────────");
    println!("Expansion scale: {:.3}x", plan.expansion_scale);
    println!("Animation: {:.2} s", plan.animation_duration);
    Ok(())
}

fn run_photo(args: &Args, baseline: f32, screen_w: f32, screen_h: f32) -> Result<()> {
    let (space_w, space_h) = parse_extent(&args.space)?;
    let context = PhotoContext {
        device: args.device,
        preferences: UserPreferences::new(args.prefer, !args.keep_original, baseline),
        capabilities: DeviceCapabilities {
            has_camera: !args.no_camera,
            has_photo_library: !args.no_library,
            supports_editing: !args.no_editing,
        },
        available_space: Extent::new(space_w, space_h),
        screen_size: Extent::new(screen_w, screen_h),
    };
    let policy = photo_policy(args.purpose, &context);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&policy)?);
        return Ok(());
    }

    println!("Photo Policy");
    println!("═══════════════════");
    println!(
        "Context: {:?} for {:?}, space {}x{} on {}x{} ({:.0}% utilization)",
        args.purpose,
        args.device,
        space_w,
        space_h,
        screen_w,
        screen_h,
        context.space_utilization() * 100.0
    );
    println!();
    println!("Strategy:");
    println!("───────────");
    println!("Capture from: {:?}", policy.capture);
    println!("Display as: {:?}", policy.display);
    println!("Editing: {}", if policy.editing_enabled { "offered" } else { "off" });
    println!("Quality: {:.2}", policy.compression_quality);
    println!("Auto-optimize: {}", if policy.auto_optimize { "yes" } else { "no" });
    Ok(())
}

/// Parse an extent string like "390x844" into a (width, height) pair
fn parse_extent(extent: &str) -> Result<(f32, f32)> {
    let (w_str, h_str) = match extent.split_once(['x', 'X']) {
        Some(parts) => parts,
        None => {
            return Err(anyhow::anyhow!(
                "Invalid size format: {}. Use WIDTHxHEIGHT, e.g. 390x844",
                extent
            ));
        }
    };
    let w: f32 = w_str
        .trim()
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid width in size: {}", w_str))?;
    let h: f32 = h_str
        .trim()
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid height in size: {}", h_str))?;
    if !(w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0) {
        return Err(anyhow::anyhow!(
            "Size must be positive: {}x{}",
            w, h
        ));
    }
    Ok((w, h))
}

/// Parse a compression baseline and reject anything outside 0.0 to 1.0
fn parse_baseline(baseline: &str) -> Result<f32> {
    let value: f32 = baseline
        .trim()
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid baseline: {}", baseline))?;
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(anyhow::anyhow!(
            "Invalid baseline: {}. Use a value between 0.0 and 1.0",
            baseline
        ));
    }
    Ok(value)
}
