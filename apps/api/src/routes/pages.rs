use axum::response::Html;

/// GET /
/// Serves the static roster upload page.
pub async fn upload_page() -> Html<&'static str> {
    Html(UPLOAD_PAGE)
}

const UPLOAD_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Student Document Generator</title>
    <style>
        body { font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif; line-height: 1.6; color: #333; max-width: 800px; margin: 40px auto; padding: 20px; background-color: #f4f7f9; }
        .container { background-color: #fff; border-radius: 8px; box-shadow: 0 4px 8px rgba(0,0,0,0.1); padding: 30px; }
        h1 { color: #2c3e50; text-align: center; }
        label { font-weight: bold; color: #34495e; display: block; margin-bottom: 8px; }
        input[type="file"] { width: 100%; padding: 10px; border-radius: 4px; border: 1px solid #ccc; margin-bottom: 20px; box-sizing: border-box; }
        button { background-color: #3498db; color: white; padding: 12px 20px; border: none; border-radius: 4px; cursor: pointer; font-size: 16px; width: 100%; transition: background-color 0.3s; }
        button:hover { background-color: #2980b9; }
    </style>
</head>
<body>
    <div class="container">
        <h1>Student Document Generator</h1>
        <form method="post" action="/api/v1/roster/generate" enctype="multipart/form-data">
            <label for="file">Upload your raw text file (.txt):</label>
            <input type="file" id="file" name="file" accept=".txt" required>
            <button type="submit">Generate Document</button>
        </form>
    </div>
</body>
</html>
"#;
