use super::student::DuplicateKey;

/// 表单校验失败
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// 有必填项为空
    #[error("All fields are required")]
    MissingFields,
    /// 邮箱格式错误
    #[error("Invalid email format. Please enter a valid email address.")]
    InvalidEmail,
    /// 出生日期无法解析
    #[error("Invalid date of birth '{0}', expected dd-mm-yyyy")]
    InvalidDate(String),
}

/// 需要选中学生的操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Update,
    Delete,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Update => f.write_str("update"),
            Action::Delete => f.write_str("delete"),
        }
    }
}

/// 自定义错误类型
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum CustomError {
    /// 表单数据不合法
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// 学号, 学年与课程重复
    #[error("Student with {0} already exists.")]
    Duplicate(DuplicateKey),
    /// 未选中学生
    #[error("Select a student to {0}")]
    Selection(Action),
    /// 未选择搜索类型或未输入关键词
    #[error("Select a search type and enter a keyword")]
    SearchCriteria,
    /// 未知的搜索类型
    #[error("Invalid search type")]
    InvalidSearchType(String),
    /// 下标越界
    #[error("No student at row {index}, {len} students in the list")]
    Index { index: usize, len: usize },
    /// 配置错误
    #[error("invalid configuration: {0}")]
    Config(String),
    /// 日志初始化失败
    #[error("failed to set up logging: {0}")]
    Logger(String),
}

