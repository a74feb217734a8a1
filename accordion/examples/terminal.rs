// Example: Terminal accordion
//
// Drives a multiple-mode accordion mounted on an in-memory document:
// - Up/Down/Home/End move focus between enabled triggers
// - Enter/Space open or close the focused panel
// - q quits
//
// Debug logs go to accordion-demo.log.

use std::fs::File;
use std::io::{self, Write};

use accordion::meltdom::{Document, Element, ElementRef, Key, Unbind};
use accordion::prelude::*;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind},
    execute, queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{self, ClearType},
};
use simplelog::{Config, LevelFilter, WriteLogger};

const SECTIONS: [(&str, &str, &str, bool); 4] = [
    ("shipping", "Shipping", "Orders leave the warehouse within two business days.", false),
    ("returns", "Returns", "Unused items can be returned for 30 days.", false),
    ("wholesale", "Wholesale", "Wholesale accounts are closed to new applications.", true),
    ("contact", "Contact", "Write to support@example.com, we answer within a day.", false),
];

struct Panel {
    props: ItemProps,
    title: &'static str,
    body: &'static str,
    item: ElementRef,
    trigger: ElementRef,
    content: ElementRef,
}

fn mount(doc: &Document, accordion: &Accordion) -> Vec<Panel> {
    let root = doc.mount(Element::div());
    apply_attributes(&root, &accordion.root().attrs());

    SECTIONS
        .iter()
        .map(|&(value, title, body, disabled)| {
            let item = root.append(Element::div());
            Panel {
                props: ItemProps::record(value, disabled),
                title,
                body,
                trigger: item.append(Element::button()),
                content: item.append(Element::section()),
                item,
            }
        })
        .collect()
}

/// Reflect the current attribute objects onto every part.
fn sync(accordion: &Accordion, panels: &[Panel]) {
    for panel in panels {
        apply_attributes(&panel.item, &accordion.item().attrs(&panel.props));
        apply_attributes(&panel.trigger, &accordion.trigger().attrs(&panel.props));
        apply_attributes(&panel.content, &accordion.content().attrs(&panel.props));
    }
}

fn draw(stdout: &mut io::Stdout, panels: &[Panel]) -> io::Result<()> {
    queue!(
        stdout,
        terminal::Clear(ClearType::All),
        cursor::MoveTo(0, 0),
        SetAttribute(Attribute::Bold),
        Print("Help center"),
        SetAttribute(Attribute::Reset),
        cursor::MoveTo(0, 1),
        SetAttribute(Attribute::Dim),
        Print("arrows/Home/End move  Enter/Space toggle  q quit"),
        SetAttribute(Attribute::Reset),
    )?;

    let mut row = 3;
    for panel in panels {
        let open = panel.trigger.attr("aria-expanded").as_deref() == Some("true");
        queue!(stdout, cursor::MoveTo(0, row))?;
        if panel.trigger.is_focused() {
            queue!(stdout, SetAttribute(Attribute::Reverse))?;
        }
        if panel.trigger.has_attr("disabled") {
            queue!(stdout, SetAttribute(Attribute::Dim))?;
        }
        queue!(
            stdout,
            Print(format!("{} {}", if open { "v" } else { ">" }, panel.title)),
            SetAttribute(Attribute::Reset),
        )?;
        row += 1;

        if !panel.content.has_attr("hidden") {
            queue!(stdout, cursor::MoveTo(4, row), Print(panel.body))?;
            row += 1;
        }
    }
    stdout.flush()
}

fn run(
    stdout: &mut io::Stdout,
    doc: &Document,
    accordion: &Accordion,
    panels: &[Panel],
) -> io::Result<()> {
    loop {
        sync(accordion, panels);
        draw(stdout, panels)?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if key.code == KeyCode::Char('q') {
            return Ok(());
        }
        let Some(focused) = doc.focused() else {
            continue;
        };
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                focused.click();
            }
            code => {
                focused.key_down(Key::from(code));
            }
        }
    }
}

fn main() -> io::Result<()> {
    if let Ok(log_file) = File::create("accordion-demo.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);
    }

    let config = AccordionConfig::new().multiple().value(vec!["shipping"]);
    let accordion = match Accordion::with_config(config) {
        Ok(accordion) => accordion,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(());
        }
    };

    let doc = Document::new();
    let panels = mount(&doc, &accordion);
    sync(&accordion, &panels);

    let bindings = Unbind::combine(panels.iter().map(|p| accordion.trigger().action(&p.trigger)));
    for panel in &panels {
        let _ = accordion.content().action(&panel.content);
    }
    doc.flush();
    if let Some(first) = panels.first() {
        first.trigger.focus();
    }

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;

    let result = run(&mut stdout, &doc, &accordion, &panels);

    execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    bindings.call();
    result
}
