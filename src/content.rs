//! Static documentation shown in the dashboard tabs. None of the code
//! blocks below is executed.

pub const TITLE: &str = "Análisis de Datos - Termómetro Digital";
pub const SUBTITLE: &str = "PIC16F887 + DHT11 + DS1307 + SD Card";

pub const INTRO_HEADING: &str = "Termómetro Digital con Análisis Estadístico";
pub const INTRO: &str = "Este notebook demuestra el análisis estadístico y pronóstico de datos de \
temperatura y humedad, sirviendo como referencia para la implementación en el microcontrolador \
PIC16F887.";

pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [Feature; 3] = [
    Feature {
        title: "Tiempo Real",
        description: "RTC DS1307 para marcas temporales precisas",
    },
    Feature {
        title: "Pronóstico",
        description: "Predicción de 6 horas usando media móvil",
    },
    Feature {
        title: "Almacenamiento",
        description: "Datos guardados en tarjeta SD",
    },
];

pub const LIBRARIES_HEADING: &str = "Librerías Requeridas";
pub const LIBRARIES_CODE: &str = "# Instalar librerías necesarias
pip install pandas numpy matplotlib seaborn scipy statsmodels";

pub const STATISTICS_HEADING: &str = "Resumen Estadístico";
pub const TEMPERATURE_LABEL: &str = "Temperatura (°C)";
pub const HUMIDITY_LABEL: &str = "Humedad (%)";

pub const STATISTICS_CODE_HEADING: &str = "Código Python";
pub const STATISTICS_CODE: &str = r#"import pandas as pd
import numpy as np

# Leer datos desde CSV
df = pd.read_csv('datos_sensor.csv')

# Calcular estadísticas descriptivas
stats_temp = df['temperatura'].describe()
stats_hum = df['humedad'].describe()

print("=== Estadísticas de Temperatura ===")
print(stats_temp)
print("\n=== Estadísticas de Humedad ===")
print(stats_hum)"#;

pub const FORECAST_HEADING: &str = "Pronóstico (6 horas)";

pub struct Method {
    pub name: &'static str,
    pub description: &'static str,
}

pub const FORECAST_METHODS_HEADING: &str = "Métodos de Pronóstico";
pub const FORECAST_METHODS: [Method; 3] = [
    Method {
        name: "1. Media Móvil Simple",
        description: "Promedio de las últimas N observaciones",
    },
    Method {
        name: "2. Suavizamiento Exponencial",
        description: "Pesos decrecientes para datos antiguos",
    },
    Method {
        name: "3. ARIMA (Avanzado)",
        description: "Modelo autorregresivo integrado de media móvil",
    },
];

pub const FORECAST_CODE_HEADING: &str = "Código de Pronóstico";
pub const FORECAST_CODE: &str = r#"from statsmodels.tsa.holtwinters import SimpleExpSmoothing
import numpy as np

# Método 1: Media Móvil Simple (para microcontrolador)
def moving_average_forecast(data, window=3, steps=6):
    forecasts = []
    for i in range(steps):
        avg = np.mean(data[-window:])
        forecasts.append(avg)
        data = np.append(data, avg)
    return forecasts

# Método 2: Suavizamiento Exponencial (Python)
def exponential_smoothing_forecast(data, steps=6):
    model = SimpleExpSmoothing(data)
    fit = model.fit()
    forecast = fit.forecast(steps=steps)
    return forecast

# Ejemplo de uso
temp_data = df['temperatura'].values
forecast_temp = moving_average_forecast(temp_data, window=3, steps=6)
print(f"Pronóstico 6 horas: {forecast_temp}")"#;

pub const NOTE: &str = "Nota: Este notebook es una demostración interactiva. Descarga el archivo \
.ipynb completo desde el repositorio para ejecutar el código real.";
