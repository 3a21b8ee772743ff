use anyhow::{Context, Result};
use strata_engine::logging::{init_logging, LoggingConfig};
use strata_ui::prelude::*;

const HEADER: &str = "
    from: #1a1a2a; to: #4c6ef5
    direction: horizontal
";

const SIDEBAR: &str = "
    // dark at the bottom, fading up into the page
    from: #0b0b12; to: #2a2a3a
    position: bottom
    length: 160
";

const CARD: &str = "from: #00e5a0; to: #111111; direction: vertical; position: right";

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let header_options = parse_options(HEADER).context("header gradient")?;
    let sidebar_options = parse_options(SIDEBAR).context("sidebar gradient")?;
    let card_options = parse_options(CARD).context("card gradient")?;

    let mut header = Element::new("header")
        .size(820, 48)
        .child(Element::new("h1").text("Strata Studio"));
    render(&mut header, &header_options);

    let mut sidebar = Element::new("nav")
        .size(180, 512)
        .position(Position::Fixed)
        .extend(["Overview", "Gradients", "Settings"].map(|label| Element::new("a").text(label)));
    render(&mut sidebar, &sidebar_options);

    // Same options, three sizes: each card gets its own strip layout.
    let mut cards: Vec<Element> = [(200, 80), (260, 80), (320, 80)]
        .into_iter()
        .enumerate()
        .map(|(i, (w, h))| {
            Element::new("div")
                .class("card")
                .size(w, h)
                .display(Display::InlineBlock)
                .text(format!("Card {}", i + 1))
        })
        .collect();
    GradientRenderer::new(card_options).render_all(cards.iter_mut());

    let page = Element::new("body")
        .child(header)
        .child(sidebar)
        .child(Element::new("main").extend(cards));

    log::info!("rendered page: {} bytes of html", page.to_html().len());
    println!("{}", page);
    Ok(())
}
