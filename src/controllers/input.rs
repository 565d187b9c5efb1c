/// Разобранный вход: стартовый список занятых мест и строки запросов.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionInput {
    pub reserved: Option<String>,
    pub requests: Vec<String>,
}

/// Делит текст на строки протокола.
///
/// Первая непустая строка - список уже занятых мест, если только это не
/// одиночное число (тогда списка нет и строка считается первым запросом).
/// Пустые строки пропускаются.
pub fn parse_session(text: &str) -> SessionInput {
    let mut lines = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty());

    let Some(first) = lines.next() else {
        return SessionInput::default();
    };

    let mut input = SessionInput::default();
    if is_numeric_token(first) {
        input.requests.push(first.to_string());
    } else {
        input.reserved = Some(first.to_string());
    }
    input.requests.extend(lines.map(str::to_string));
    input
}

// Число со знаком и дробной частью тоже считаем запросом:
// пусть оркестратор отклонит его как запрос, а не как токен места.
fn is_numeric_token(line: &str) -> bool {
    let unsigned = line.strip_prefix(|c: char| c == '-' || c == '+').unwrap_or(line);
    !unsigned.is_empty()
        && unsigned.bytes().any(|b| b.is_ascii_digit())
        && unsigned.bytes().all(|b| b.is_ascii_digit() || b == b'.')
}
