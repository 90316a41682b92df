// ==========================================
// 测试数据生成器
// ==========================================
// 用途: 生成一份与上游接口同构的响应体样例文件,
//       供命令行入口演示与手工排查使用
// 用法: cargo run --bin generate_test_data [输出路径]
// ==========================================

use serde_json::json;

fn main() -> std::io::Result<()> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "transfers_sample.json".to_string());

    let body = json!({
        "data": { "data": [
            {
                "to_city": "Tanger",
                "timestamps": {
                    "created": "2026-08-06T09:15:00Z",
                    "updated": "2026-08-06T10:00:00Z"
                },
                "client": { "brand": { "name": "Acme" } },
                "products": [
                    { "product": { "name": "Box" }, "quantity": 2 },
                    { "product": { "name": "Bag" }, "quantity": 1 }
                ]
            },
            {
                "to_city": "Casablanca",
                "timestamps": {
                    "created": "2026-08-06T19:20:00Z",
                    "updated": "2026-08-06T19:25:00Z"
                },
                "client": { "brand": { "name": "Nord" } },
                "products": [
                    { "product": { "name": "Box" }, "quantity": 5 }
                ]
            },
            {
                "to_city": "Rabat",
                "timestamps": {
                    "created": "2026-08-05T11:00:00Z",
                    "updated": "2026-08-05T11:00:00Z"
                },
                "products": []
            }
        ] }
    });

    std::fs::write(&path, serde_json::to_string_pretty(&body)?)?;
    println!("样例响应体已写入: {}", path);
    Ok(())
}
