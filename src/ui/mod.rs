//! 终端交互层
//!
//! rustyline 命令循环，按行分发到两个视图；
//! 所有错误在这里着色输出给用户，相当于页面上的 alert。

use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::info;

use crate::api::CatalogApi;
use crate::services::RecommendService;
use crate::views::{CatalogView, RecommendView};

/// 运行交互循环，直到用户退出
pub async fn run(api: &dyn CatalogApi, service: &RecommendService) -> anyhow::Result<()> {
    let mut catalog = CatalogView::new();
    let mut recommend = RecommendView::new();
    // 推荐视图在第一次使用时"挂载"，只加载一次课程标题
    let mut recommend_mounted = false;

    println!("{}", "RIC 选课平台".bold());

    match catalog.init(api).await {
        Ok(()) => render_courses(&catalog),
        Err(e) => print_error(&format!("初始加载失败: {}", e)),
    }
    print_help();

    let mut rl = DefaultEditor::new()?;

    loop {
        match rl.readline(">> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line);

                let (cmd, arg) = split_command(line);
                match cmd {
                    "help" => print_help(),
                    "courses" | "all" => match catalog.select_student(api, None).await {
                        Ok(()) => render_courses(&catalog),
                        Err(e) => print_error(&format!("加载课程失败: {}", e)),
                    },
                    "students" => match catalog.refresh_students(api).await {
                        Ok(()) => render_students(&catalog),
                        Err(e) => print_error(&format!("加载学生失败: {}", e)),
                    },
                    "select" => match arg.parse::<i64>() {
                        Ok(id) => match catalog.select_student(api, Some(id)).await {
                            Ok(()) => render_courses(&catalog),
                            Err(e) => print_error(&format!("加载学生课程失败: {}", e)),
                        },
                        Err(_) => print_error("用法: select <学生 id>"),
                    },
                    "add" => match catalog.add_student(api, arg).await {
                        Ok(student) => {
                            println!(
                                "{}",
                                format!("已添加学生: {} (id={})", student.name, student.id)
                                    .green()
                            );
                            render_students(&catalog);
                        }
                        Err(e) => print_error(&format!("新增学生失败: {}", e)),
                    },
                    "recommend" => {
                        handle_recommend(
                            api,
                            service,
                            &mut recommend,
                            &mut recommend_mounted,
                            arg,
                        )
                        .await;
                    }
                    "quit" | "exit" => break,
                    _ => println!("{}", "未知命令，输入 help 查看用法".yellow()),
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => {
                print_error(&format!("读取输入失败: {}", e));
                break;
            }
        }
    }

    info!("Exiting");
    Ok(())
}

/// 处理推荐命令
async fn handle_recommend(
    api: &dyn CatalogApi,
    service: &RecommendService,
    view: &mut RecommendView,
    mounted: &mut bool,
    major: &str,
) {
    if !*mounted {
        match view.init(api).await {
            Ok(()) => {
                *mounted = true;
                println!("已加载课程数量：{}", view.titles_loaded());
            }
            Err(e) => {
                print_error(&format!("加载课程失败: {}", e));
                return;
            }
        }
    }

    println!("{}", "生成中...".dimmed());
    match view.generate(service, major).await {
        Ok(answer) => {
            println!("{}", "AI 推荐选课".bold());
            println!("{}", answer);
        }
        Err(e) => print_error(&format!("生成推荐失败: {}", e)),
    }
}

/// 拆分命令与参数
fn split_command(line: &str) -> (&str, &str) {
    match line.split_once(char::is_whitespace) {
        Some((cmd, arg)) => (cmd, arg.trim()),
        None => (line, ""),
    }
}

fn render_courses(view: &CatalogView) {
    println!("{:<10} {}", "课程代码".bold(), "课程名称".bold());
    for course in view.courses() {
        println!("{:<10} {}", course.code, course.title);
    }
    println!("共 {} 门课程", view.count().to_string().bold());
}

fn render_students(view: &CatalogView) {
    for student in view.students() {
        println!("  [{}] {}", student.id, student.name);
    }
    println!("共 {} 名学生", view.students().len());
}

fn print_error(message: &str) {
    println!("{}", message.red());
}

fn print_help() {
    println!("可用命令:");
    println!("  courses | all      查看所有课程");
    println!("  students           查看学生列表");
    println!("  select <id>        查看某个学生的课程");
    println!("  add <姓名>         新增学生");
    println!("  recommend <专业>   AI 推荐选课");
    println!("  help               显示本帮助");
    println!("  quit               退出");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_command() {
        assert_eq!(split_command("courses"), ("courses", ""));
        assert_eq!(split_command("select 7"), ("select", "7"));
        assert_eq!(
            split_command("recommend Computer Science"),
            ("recommend", "Computer Science")
        );
        assert_eq!(split_command("add  张三 "), ("add", "张三"));
    }
}
