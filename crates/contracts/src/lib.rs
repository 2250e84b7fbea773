//! Общие типы фронтенда и бэкенда VerifiNews-AI.
//!
//! Всё, что пересекает границу HTTP, описано здесь: тело запроса
//! `POST /predict`, ответ сервера инференса, тело ошибки и конфигурация
//! клиента, которую отдаёт хост.

pub mod enums;
pub mod system;
pub mod usecases;
