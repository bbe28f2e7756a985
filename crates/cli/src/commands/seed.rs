//! Database seeding command.
//!
//! Inserts the initial portfolio content: the three long-form project
//! case studies and a few sample works. Safe to re-run; entries whose
//! slug or title already exists are skipped.

use portfolio_site::db::{ProjectRepository, RepositoryError, WorkRepository};
use portfolio_site::models::{NewProject, NewWork};

use super::{CommandError, connect};

/// Seed the database with initial works and projects.
pub async fn run() -> Result<(), CommandError> {
    let pool = connect().await?;

    let projects = ProjectRepository::new(&pool);
    for project in seed_projects() {
        match projects.create(&project).await {
            Ok(created) => tracing::info!(slug = %created.slug, "Seeded project"),
            Err(RepositoryError::Conflict(_)) => {
                tracing::info!(slug = %project.slug, "Project already exists, skipping");
            }
            Err(e) => return Err(e.into()),
        }
    }

    let works = WorkRepository::new(&pool);
    let existing: Vec<String> = works
        .list(None)
        .await?
        .into_iter()
        .map(|w| w.title)
        .collect();
    for work in seed_works() {
        if existing.contains(&work.title) {
            tracing::info!(title = %work.title, "Work already exists, skipping");
            continue;
        }
        let created = works.create(&work).await?;
        tracing::info!(title = %created.title, "Seeded work");
    }

    tracing::info!("Seeding complete!");
    Ok(())
}

fn seed_projects() -> Vec<NewProject> {
    vec![
        NewProject {
            slug: "hanabi".to_string(),
            title: "花火大会の混雑可視化".to_string(),
            summary: "来場者の流れをリアルタイムに可視化し、会場運営を支援"
                .to_string(),
            overview: "花火大会の会場周辺の人流データを収集し、混雑状況を\
                       地図上にリアルタイム表示するシステムを構築した。"
                .to_string(),
            background: "毎年数十万人が訪れる花火大会では、駅や橋などで\
                         危険な混雑が発生していた。"
                .to_string(),
            approach: "携帯基地局の統計データとスタッフの目視報告を組み合わせ、\
                       エリアごとの密度をヒートマップとして描画した。"
                .to_string(),
            result: "運営本部が迂回誘導の判断を早められるようになり、\
                     ピーク時の滞留が前年より緩和された。"
                .to_string(),
            image: Some("/static/img/projects/hanabi.jpg".to_string()),
            featured: true,
        },
        NewProject {
            slug: "sony".to_string(),
            title: "組込みカメラ制御ファームウェア".to_string(),
            summary: "産業用カメラモジュールの制御ファームウェア開発".to_string(),
            overview: "産業用カメラモジュール向けに、露出・フォーカス制御と\
                       ホストへの転送を担うファームウェアを開発した。"
                .to_string(),
            background: "既存実装は転送帯域を使い切れず、高フレームレートの\
                         要件を満たせていなかった。"
                .to_string(),
            approach: "転送パイプラインを二重バッファ化し、制御ループを\
                       割り込み駆動に書き換えた。"
                .to_string(),
            result: "実効フレームレートが約1.8倍になり、量産ラインの検査\
                     タクトを短縮できた。"
                .to_string(),
            image: Some("/static/img/projects/sony.jpg".to_string()),
            featured: true,
        },
        NewProject {
            slug: "iot".to_string(),
            title: "農業IoTセンサーネットワーク".to_string(),
            summary: "圃場センサーの収集基盤とダッシュボード".to_string(),
            overview: "土壌水分・気温・日照のセンサーデータを収集し、\
                       生育管理に使えるダッシュボードを提供した。"
                .to_string(),
            background: "点在する圃場の見回りに時間がかかり、潅水の判断が\
                         勘に頼っていた。"
                .to_string(),
            approach: "低消費電力の無線ノードを設計し、ゲートウェイ経由で\
                       クラウドへ集約する構成とした。"
                .to_string(),
            result: "潅水のタイミングをデータで判断できるようになり、\
                     水の使用量を2割削減した。"
                .to_string(),
            image: Some("/static/img/projects/iot.jpg".to_string()),
            featured: true,
        },
    ]
}

fn seed_works() -> Vec<NewWork> {
    vec![
        NewWork {
            title: "ポートフォリオサイト".to_string(),
            description: "このサイト自体。管理画面から作品と実績を更新できる。"
                .to_string(),
            image: Some("/static/img/works/portfolio.png".to_string()),
        },
        NewWork {
            title: "写真展フライヤー".to_string(),
            description: "友人の写真展のために制作した案内フライヤー。"
                .to_string(),
            image: None,
        },
        NewWork {
            title: "勉強会スライドテンプレート".to_string(),
            description: "社内勉強会向けに作ったスライドのテンプレート一式。"
                .to_string(),
            image: None,
        },
    ]
}
