use crate::domain::model::StatisticsTable;

pub const HEADER: [&str; 4] = [
    "Язык программирования",
    "Вакансий найдено",
    "Вакансий обработано",
    "Средняя зарплата",
];

const PADDING: usize = 1;

fn cell_width(cell: &str) -> usize {
    cell.chars().count()
}

fn border(widths: &[usize]) -> String {
    let segments: Vec<String> = widths
        .iter()
        .map(|width| "-".repeat(width + 2 * PADDING))
        .collect();
    format!("+{}+", segments.join("+"))
}

/// 標題嵌入上框線，放不下時只畫框線
fn top_border(widths: &[usize], title: &str) -> String {
    let plain = border(widths);
    let inner_width = cell_width(&plain) - 2;
    let title_width = cell_width(title);
    if title.is_empty() || title_width > inner_width {
        return plain;
    }

    let rest: String = plain.chars().skip(1 + title_width).collect();
    format!("+{}{}", title, rest)
}

fn row(cells: &[String], widths: &[usize]) -> String {
    let padding = " ".repeat(PADDING);
    let columns: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let fill = " ".repeat(width - cell_width(cell));
            format!("{}{}{}{}", padding, cell, fill, padding)
        })
        .collect();
    format!("|{}|", columns.join("|"))
}

/// 將單一來源的統計輸出為 ASCII 表格，標題位於上框線
pub fn render_table(statistics: &StatisticsTable, title: &str) -> String {
    let mut rows: Vec<Vec<String>> = vec![HEADER.iter().map(|label| label.to_string()).collect()];
    for (language, stats) in statistics.iter() {
        rows.push(vec![
            language.to_string(),
            stats.vacancies_found.to_string(),
            stats.vacancies_processed.to_string(),
            stats.average_salary.to_string(),
        ]);
    }

    let widths: Vec<usize> = (0..HEADER.len())
        .map(|column| {
            rows.iter()
                .map(|cells| cell_width(&cells[column]))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut lines = Vec::with_capacity(rows.len() + 3);
    lines.push(top_border(&widths, title));
    lines.push(row(&rows[0], &widths));
    lines.push(border(&widths));
    for cells in &rows[1..] {
        lines.push(row(cells, &widths));
    }
    lines.push(border(&widths));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::LanguageStatistics;

    fn sample() -> StatisticsTable {
        let mut table = StatisticsTable::new();
        table.insert(
            "Python",
            LanguageStatistics {
                vacancies_found: 1523,
                vacancies_processed: 412,
                average_salary: 187500,
            },
        );
        table.insert(
            "1C",
            LanguageStatistics {
                vacancies_found: 7,
                vacancies_processed: 0,
                average_salary: 0,
            },
        );
        table
    }

    #[test]
    fn test_render_layout() {
        let rendered = render_table(&sample(), "HeadHunter Moscow");
        let expected = [
            "+HeadHunter Moscow------+------------------+---------------------+------------------+",
            "| Язык программирования | Вакансий найдено | Вакансий обработано | Средняя зарплата |",
            "+-----------------------+------------------+---------------------+------------------+",
            "| Python                | 1523             | 412                 | 187500           |",
            "| 1C                    | 7                | 0                   | 0                |",
            "+-----------------------+------------------+---------------------+------------------+",
        ]
        .join("\n");

        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_lines_have_equal_width() {
        let rendered = render_table(&sample(), "SuperJob Moscow");
        let widths: Vec<usize> = rendered.lines().map(|line| line.chars().count()).collect();
        assert!(widths.iter().all(|width| *width == widths[0]));
    }

    #[test]
    fn test_empty_statistics_render_header_only() {
        let rendered = render_table(&StatisticsTable::new(), "SuperJob Moscow");
        assert_eq!(rendered.lines().count(), 4);
        assert!(rendered.starts_with("+SuperJob Moscow-"));
    }

    #[test]
    fn test_title_spanning_columns() {
        let mut table = StatisticsTable::new();
        table.insert(
            "Go",
            LanguageStatistics {
                vacancies_found: 1,
                vacancies_processed: 1,
                average_salary: 5,
            },
        );
        let title = "A very long title that runs past the first column";
        let rendered = render_table(&table, title);
        let top = rendered.lines().next().unwrap();
        assert!(top.starts_with(&format!("+{}", title)));
        assert!(top.ends_with('+'));
        assert_eq!(
            top.chars().count(),
            rendered.lines().nth(1).unwrap().chars().count()
        );
    }

    #[test]
    fn test_title_too_wide_is_dropped() {
        let title = "x".repeat(500);
        let rendered = render_table(&sample(), &title);
        assert!(rendered.lines().next().unwrap().starts_with("+-----"));
    }
}
