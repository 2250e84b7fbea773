/// Метаданные UseCase: идентификация, подписи для UI и адрес на сервере
pub trait UseCaseMetadata {
    /// Индекс UseCase (например, "u501")
    fn usecase_index() -> &'static str;

    /// Техническое имя (например, "predict_news")
    fn usecase_name() -> &'static str;

    /// Заголовок для UI
    fn display_name() -> &'static str;

    /// Пояснение для пользователя, выводится под заголовком
    fn description() -> &'static str {
        ""
    }

    /// Путь ресурса относительно базового адреса сервера
    fn endpoint() -> &'static str;

    /// Полное имя вида "u501_predict_news"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }

    /// Абсолютный адрес ресурса. Завершающий `/` у базы не дублируется.
    fn endpoint_url(base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), Self::endpoint())
    }
}
