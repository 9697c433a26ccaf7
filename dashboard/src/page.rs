use axum::response::Html;

pub async fn dashboard() -> Html<&'static str> {
    Html(DASHBOARD_HTML)
}

// Cards and chart are filled from /api/v1/dashboard on load, then from the
// `dashboard` events on /api/v1/stream.
const DASHBOARD_HTML: &str = r##"<!DOCTYPE html>
<html lang="fr">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Monitoring capteurs</title>
    <script src="https://cdn.plot.ly/plotly-2.35.2.min.js"></script>
    <style>
        :root {
            --bg: #1e2130;
            --card: #2b2f4b;
            --text: #ffffff;
            --grid: #3d405b;
        }
        * { box-sizing: border-box; }
        body {
            margin: 0;
            padding: 20px;
            background: var(--bg);
            color: var(--text);
            font-family: sans-serif;
        }
        h1 {
            text-align: center;
            margin-bottom: 30px;
            font-weight: bold;
            letter-spacing: 2px;
        }
        .cards {
            display: grid;
            grid-template-columns: repeat(4, 1fr);
            gap: 20px;
            margin-bottom: 30px;
        }
        .card {
            background: var(--card);
            padding: 20px;
            border-radius: 15px;
            border-left: 10px solid var(--accent);
            text-align: center;
        }
        .card h3 { font-size: 16px; opacity: 0.7; margin: 0 0 10px; }
        .card p { font-size: 28px; font-weight: bold; margin: 0; color: var(--accent); min-height: 34px; }
        #chart { width: 100%; border-radius: 15px; overflow: hidden; }
    </style>
</head>
<body>
    <h1>🚀 MONITORING CAPTEURS TEMPS RÉEL</h1>
    <div class="cards" id="cards"></div>
    <div id="chart"></div>

    <script>
        const cards = document.getElementById('cards');

        function renderCards(views) {
            cards.replaceChildren(...views.map(view => {
                const card = document.createElement('div');
                card.className = 'card';
                card.style.setProperty('--accent', view.color);
                const label = document.createElement('h3');
                label.textContent = view.label;
                const value = document.createElement('p');
                value.textContent = view.text;
                card.append(label, value);
                return card;
            }));
        }

        function renderChart(chart) {
            const traces = chart.series.map(series => ({
                x: chart.time,
                y: series.y,
                name: series.name,
                mode: series.mode,
                line: { color: series.color, width: series.width },
                yaxis: series.axis,
                type: 'scatter',
            }));
            const layout = {
                paper_bgcolor: 'rgba(0,0,0,0)',
                plot_bgcolor: 'rgba(0,0,0,0)',
                font: { color: 'white' },
                margin: { l: 40, r: 40, t: 40, b: 40 },
                legend: { orientation: 'h', yanchor: 'bottom', y: 1.02, xanchor: 'right', x: 1 },
                xaxis: { gridcolor: '#3d405b' },
                yaxis: { title: chart.y_axis.title, side: chart.y_axis.side, gridcolor: '#3d405b' },
                yaxis2: { title: chart.y_axis2.title, side: chart.y_axis2.side, overlaying: chart.y_axis2.overlaying },
            };
            Plotly.react('chart', traces, layout, { responsive: true });
        }

        function render(view) {
            renderCards(view.cards);
            renderChart(view.chart);
        }

        fetch('/api/v1/dashboard').then(r => r.json()).then(render);

        const source = new EventSource('/api/v1/stream');
        source.addEventListener('dashboard', event => render(JSON.parse(event.data)));
    </script>
</body>
</html>
"##;
