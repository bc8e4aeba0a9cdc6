//! Article noise cleaning
//!
//! Scraped news text often carries metadata lines the scraper failed to
//! strip: photo captions, bylines, reading-time markers, bare date lines,
//! agency names, and a repeat of the headline. This module drops those
//! lines before segmentation. It is an opt-in helper; the summarizer never
//! invokes it implicitly.

use std::sync::OnceLock;

use regex_lite::Regex;

/// Line patterns that mark scraper noise rather than article prose.
fn noise_patterns() -> &'static [Regex] {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            // "Kaynak, Getty Images" — image source credit.
            r"^[Kk]aynak\s*[,:]",
            // "Fotoğraf altı yazısı, ..." — photo caption marker.
            r"^[Ff]otoğraf\s+(altı\s+yazısı|açıklaması)\s*[,:]",
            // "Yazan, ..." / "Unvan, ..." — byline and role lines.
            r"^[Yy]azan\s*[,:]",
            r"^[Uu]nvan\s*[,:]",
            // "Okuma süresi 7 dk".
            r"^[Oo]kuma\s+süresi\s+\d+",
            // Bare date lines: "25 Şubat 2026".
            r"^\d{1,2}\s+(Ocak|Şubat|Mart|Nisan|Mayıs|Haziran|Temmuz|Ağustos|Eylül|Ekim|Kasım|Aralık)\s+\d{4}$",
            // Standalone agency credits.
            r"^(Getty\s+Images|Reuters|AFP|AP|AA|İHA|DHA)$",
            // "BBC Türkçe" style source lines.
            r"^BBC\s+\S+$",
        ]
        .iter()
        .map(|p| Regex::new(p).expect("noise pattern is valid"))
        .collect()
    })
}

/// Remove known noise lines and title repeats from article text.
///
/// Empty lines are kept as paragraph separators. The returned text is
/// trimmed.
pub fn clean_article_text(text: &str, title: &str) -> String {
    let norm_title = normalize_line(title);

    let mut kept: Vec<&str> = Vec::new();
    for line in text.lines() {
        let stripped = line.trim();

        if stripped.is_empty() {
            kept.push("");
            continue;
        }

        if noise_patterns().iter().any(|p| p.is_match(stripped)) {
            continue;
        }

        // Drop lines that repeat the headline, including partial repeats
        // in either direction.
        if !norm_title.is_empty() {
            let norm_line = normalize_line(stripped);
            if norm_line == norm_title
                || norm_line.contains(&norm_title)
                || norm_title.contains(&norm_line)
            {
                continue;
            }
        }

        kept.push(line);
    }

    kept.join("\n").trim().to_string()
}

/// Collapse whitespace and lowercase, for title comparisons.
fn normalize_line(line: &str) -> String {
    line.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drops_caption_and_source_lines() {
        let text = "Kaynak, Getty Images\nEnflasyon verileri açıklandı.\nReuters\nPiyasalar tepki verdi.";
        let cleaned = clean_article_text(text, "");

        assert_eq!(
            cleaned,
            "Enflasyon verileri açıklandı.\nPiyasalar tepki verdi."
        );
    }

    #[test]
    fn test_drops_byline_and_reading_time() {
        let text = "Yazan, Ayşe Demir\nUnvan, Ekonomi Muhabiri\nOkuma süresi 7 dk\nAsıl haber metni burada.";
        let cleaned = clean_article_text(text, "");

        assert_eq!(cleaned, "Asıl haber metni burada.");
    }

    #[test]
    fn test_drops_bare_date_lines() {
        let text = "25 Şubat 2026\nHaber metni devam ediyor.";
        let cleaned = clean_article_text(text, "");

        assert_eq!(cleaned, "Haber metni devam ediyor.");
    }

    #[test]
    fn test_date_inside_prose_survives() {
        let text = "Toplantı 25 Şubat 2026 tarihinde yapıldı.";
        let cleaned = clean_article_text(text, "");

        assert_eq!(cleaned, text);
    }

    #[test]
    fn test_title_repeat_removed() {
        let text = "Merkez Bankası faiz kararını açıkladı\nHaberin gövdesi burada.";
        let cleaned = clean_article_text(text, "Merkez Bankası Faiz Kararını Açıkladı");

        assert_eq!(cleaned, "Haberin gövdesi burada.");
    }

    #[test]
    fn test_empty_lines_kept_as_separators() {
        let text = "Birinci paragraf.\n\nİkinci paragraf.";
        let cleaned = clean_article_text(text, "");

        assert_eq!(cleaned, text);
    }

    #[test]
    fn test_bbc_source_line_dropped() {
        let cleaned = clean_article_text("BBC Türkçe\nHaber metni.", "");
        assert_eq!(cleaned, "Haber metni.");
    }
}
