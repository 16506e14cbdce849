//! Inspect command implementation

use anyhow::Result;

use floater::domain::Canon;
use floater::floater::{GridLayout, Stage};

/// Print the grids a canon produces at every stage
pub fn inspect_command(canon: &Canon) -> Result<()> {
    let books = canon.books();
    let book_grid = GridLayout::for_stage(Stage::Book, books.len());

    println!("Canon: {} ({} books)", canon.name(), books.len());
    println!(
        "Book grid: {} column(s) x {} rows\n",
        book_grid.columns, book_grid.rows
    );

    for book in books {
        let chapter_grid = GridLayout::for_stage(Stage::Chapter, book.chapter_count);
        let max_verses = book.verse_counts.iter().copied().max().unwrap_or(0);
        let verse_grid = GridLayout::for_stage(Stage::Verse, max_verses);

        println!(
            "  {:>3} {:<6} {:>3} ch  chapters {}x{:<3} verses up to {:>3} ({}x{})",
            book.book_id,
            book.short_name,
            book.chapter_count,
            chapter_grid.columns,
            chapter_grid.rows,
            max_verses,
            verse_grid.columns,
            verse_grid.rows,
        );
    }

    Ok(())
}
