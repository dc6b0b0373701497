/// 單一程式語言的職缺統計
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageStatistics {
    pub vacancies_found: usize,
    pub vacancies_processed: usize,
    pub average_salary: u64,
}

/// 單一來源的各語言統計，依設定的語言順序保存
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatisticsTable {
    entries: Vec<(String, LanguageStatistics)>,
}

impl StatisticsTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// 重複的語言保留原本位置，數值以新的為準
    pub fn insert(&mut self, language: impl Into<String>, statistics: LanguageStatistics) {
        let language = language.into();
        match self.entries.iter_mut().find(|(name, _)| *name == language) {
            Some((_, existing)) => *existing = statistics,
            None => self.entries.push((language, statistics)),
        }
    }

    pub fn get(&self, language: &str) -> Option<&LanguageStatistics> {
        self.entries
            .iter()
            .find(|(name, _)| name == language)
            .map(|(_, statistics)| statistics)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LanguageStatistics)> {
        self.entries
            .iter()
            .map(|(name, statistics)| (name.as_str(), statistics))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
